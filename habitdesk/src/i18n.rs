//! # Localization
//!
//! Static string table for all user-facing form copy. Languages are added
//! by adding a table, never by branching on the tag at call sites.

/// Supported language tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

/// Text direction for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Ltr,
    Rtl,
}

impl Dir {
    /// Directional mark to prepend to rendered lines. Bidi-aware terminals
    /// use U+200F to lay a right-to-left line out correctly; left-to-right
    /// text needs no mark.
    pub fn mark(self) -> &'static str {
        match self {
            Dir::Ltr => "",
            Dir::Rtl => "\u{200F}",
        }
    }
}

/// All user-facing strings for one language
#[derive(Debug)]
pub struct Translations {
    pub login_title: &'static str,
    pub signup_title: &'static str,
    pub login_desc: &'static str,
    pub signup_desc: &'static str,
    pub full_name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub login_button: &'static str,
    pub signup_button: &'static str,
    pub loading: &'static str,
    pub no_account: &'static str,
    pub has_account: &'static str,
    pub or_continue: &'static str,
    pub google_login_failed: &'static str,
    pub welcome_back: &'static str,
    pub account_created: &'static str,
}

static EN: Translations = Translations {
    login_title: "Welcome Back",
    signup_title: "Create Account",
    login_desc: "Enter your credentials to access your habits.",
    signup_desc: "Start your journey to better habits today.",
    full_name: "Full Name",
    email: "Email",
    password: "Password",
    login_button: "Sign In",
    signup_button: "Sign Up",
    loading: "Please wait...",
    no_account: "Don't have an account? Sign Up",
    has_account: "Already have an account? Sign In",
    or_continue: "Or continue with",
    google_login_failed: "Google Login Failed",
    welcome_back: "Welcome back!",
    account_created: "Account created! Please login.",
};

static AR: Translations = Translations {
    login_title: "مرحباً بعودتك",
    signup_title: "إنشاء حساب",
    login_desc: "أدخل بيانات اعتمادك للوصول إلى عاداتك.",
    signup_desc: "ابدأ رحلتك نحو عادات أفضل اليوم.",
    full_name: "الاسم الكامل",
    email: "البريد الإلكتروني",
    password: "كلمة المرور",
    login_button: "تسجيل الدخول",
    signup_button: "إنشاء حساب",
    loading: "يرجى الانتظار...",
    no_account: "ليس لديك حساب؟ إنشاء حساب",
    has_account: "لديك حساب بالفعل؟ تسجيل الدخول",
    or_continue: "أو المتابعة باستخدام",
    google_login_failed: "فشل تسجيل الدخول عبر Google",
    welcome_back: "مرحباً بعودتك!",
    account_created: "تم إنشاء الحساب! يرجى تسجيل الدخول.",
};

impl Lang {
    /// Parse a two-letter language tag. Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ar" => Lang::Ar,
            _ => Lang::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Rendering direction; Arabic is right-to-left.
    pub fn dir(self) -> Dir {
        match self {
            Lang::En => Dir::Ltr,
            Lang::Ar => Dir::Rtl,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Lang::En => &EN,
            Lang::Ar => &AR,
        }
    }
}
