//! Interface copy in Korean and English.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ko => Self::En,
            Self::En => Self::Ko,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ko => "KO",
            Self::En => "EN",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ko => &KO,
            Self::En => &EN,
        }
    }
}

#[derive(Debug)]
pub struct Strings {
    pub nav_status: &'static str,
    pub nav_docs: &'static str,
    pub nav_login: &'static str,
    pub nav_signup: &'static str,

    pub computing: &'static str,
    pub storage: &'static str,
    pub network: &'static str,

    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub features_title: &'static str,
    pub pricing_title: &'static str,
    pub cta_title: &'static str,
    pub cta_body: &'static str,
    pub cta_fineprint: &'static str,

    pub auth_email: &'static str,
    pub auth_password: &'static str,
    pub auth_confirm_password: &'static str,
    pub auth_name: &'static str,
    pub auth_welcome: &'static str,
    pub auth_create_account: &'static str,
    pub auth_login_subtitle: &'static str,
    pub auth_signup_subtitle: &'static str,
    pub auth_no_account: &'static str,
    pub auth_has_account: &'static str,
    pub auth_plaintext_notice: &'static str,

    pub portal_choose_account: &'static str,
    pub portal_add_account: &'static str,
    pub portal_loading: &'static str,
    pub portal_initializing: &'static str,
    pub portal_no_accounts: &'static str,
    pub portal_select_account: &'static str,
    pub portal_secure_session: &'static str,
    pub loading_cancel: &'static str,
    pub portal_signup_done: &'static str,

    pub status_title: &'static str,
    pub status_subtitle: &'static str,
    pub status_operational: &'static str,
    pub status_uptime: &'static str,
    pub status_regions: &'static str,
    pub status_api: &'static str,
    pub status_active_regions: &'static str,
    pub status_incidents: &'static str,
    pub status_no_incidents: &'static str,

    pub docs_title: &'static str,
    pub docs_subtitle: &'static str,
    pub docs_categories: &'static [&'static str],
    pub docs_welcome_title: &'static str,
    pub docs_welcome_desc: &'static str,

    pub not_found_title: &'static str,
    pub not_found_desc: &'static str,
    pub not_found_home: &'static str,

    pub mobile_title: &'static str,
    pub mobile_body: &'static str,
    pub mobile_disclaimer: &'static str,
    pub mobile_dont_show: &'static str,
    pub mobile_confirm: &'static str,

    pub specs_title: &'static str,

    pub hint_pages: &'static str,
    pub hint_picker: &'static str,
    pub hint_form: &'static str,

    pub footer_company: &'static str,
    pub footer_copyright: &'static str,
}

pub static KO: Strings = Strings {
    nav_status: "상태",
    nav_docs: "문서",
    nav_login: "로그인",
    nav_signup: "회원가입",

    computing: "컴퓨팅",
    storage: "스토리지",
    network: "네트워크",

    hero_title: "대한민국을 위한 클라우드",
    hero_subtitle: "안정적인 인프라를 합리적인 가격으로 시작하세요.",
    features_title: "주요 기능",
    pricing_title: "서비스",
    cta_title: "이제 준비 되셨나요?",
    cta_body: "초기 도입비용 걱정없이, 무료*로 시작해보세요!",
    cta_fineprint: "*비즈니스 회원 전용, 일부 예외.",

    auth_email: "이메일",
    auth_password: "비밀번호",
    auth_confirm_password: "비밀번호 확인",
    auth_name: "이름",
    auth_welcome: "다시 오신 것을 환영합니다",
    auth_create_account: "계정 만들기",
    auth_login_subtitle: "계정 정보를 입력하세요",
    auth_signup_subtitle: "몇 초면 시작할 수 있습니다",
    auth_no_account: "계정이 없으신가요? 회원가입",
    auth_has_account: "이미 계정이 있으신가요? 로그인",
    auth_plaintext_notice: "데모 포털: 비밀번호는 암호화 없이 로컬에 저장됩니다.",

    portal_choose_account: "계정 선택",
    portal_add_account: "계정 추가",
    portal_loading: "Portal 접속 중",
    portal_initializing: "보안 세션을 초기화하는 중...",
    portal_no_accounts: "등록된 계정이 없습니다.",
    portal_select_account: "계속할 계정을 선택하세요.",
    portal_secure_session: "보안 세션",
    loading_cancel: "Esc 키로 취소",
    portal_signup_done: "계정이 성공적으로 생성되었습니다.",

    status_title: "시스템 상태",
    status_subtitle: "모든 리전의 실시간 운영 현황",
    status_operational: "모든 시스템 정상",
    status_uptime: "가동률",
    status_regions: "리전",
    status_api: "API 가용성",
    status_active_regions: "활성 리전",
    status_incidents: "장애 이력",
    status_no_incidents: "최근 90일간 보고된 장애가 없습니다.",

    docs_title: "문서",
    docs_subtitle: "Republic Cloud를 시작하는 데 필요한 모든 것",
    docs_categories: &["시작하기", "컴퓨팅", "스토리지", "네트워크", "API 레퍼런스"],
    docs_welcome_title: "문서에 오신 것을 환영합니다",
    docs_welcome_desc: "문서는 준비 중입니다. 곧 업데이트됩니다.",

    not_found_title: "페이지를 찾을 수 없습니다",
    not_found_desc: "요청하신 페이지가 존재하지 않거나 이동되었습니다.",
    not_found_home: "홈으로",

    mobile_title: "PC 접속 권장",
    mobile_body: "Portal은 좁은 화면에 최적화 되어있지 않으며, 예기치 못한 문제*가 발생할 수 있습니다.",
    mobile_disclaimer: "*면책조항: 당사는 모바일 환경에서의 오류에 대해 책임지지 않습니다.",
    mobile_dont_show: "다시 보지 않기",
    mobile_confirm: "확인",

    specs_title: "사양",

    hint_pages: "←→ 메뉴   Enter 열기   ↑↓ 스크롤   : 이동   l/F2 언어   q 종료",
    hint_picker: "↑↓ 선택   Enter 계속   l/F2 언어   Esc 나가기",
    hint_form: "Tab/↑↓ 항목   Enter 제출   F2 언어   Esc 뒤로",

    footer_company: "Republic Cloud 주식회사",
    footer_copyright: "© Republic Cloud. All rights reserved.",
};

pub static EN: Strings = Strings {
    nav_status: "Status",
    nav_docs: "Docs",
    nav_login: "Log in",
    nav_signup: "Sign up",

    computing: "Computing",
    storage: "Storage",
    network: "Network",

    hero_title: "The cloud built for Korea",
    hero_subtitle: "Reliable infrastructure at a reasonable price.",
    features_title: "Features",
    pricing_title: "Services",
    cta_title: "Are you ready?",
    cta_body: "Start for free* without worrying about initial costs!",
    cta_fineprint: "*Business members only, some exceptions apply.",

    auth_email: "Email",
    auth_password: "Password",
    auth_confirm_password: "Confirm password",
    auth_name: "Name",
    auth_welcome: "Welcome back",
    auth_create_account: "Create account",
    auth_login_subtitle: "Enter your account details",
    auth_signup_subtitle: "Get started in seconds",
    auth_no_account: "No account? Sign up",
    auth_has_account: "Already have an account? Log in",
    auth_plaintext_notice: "Demo portal: passwords are stored locally without encryption.",

    portal_choose_account: "Choose an account",
    portal_add_account: "Add account",
    portal_loading: "Connecting to Portal",
    portal_initializing: "Initializing secure session...",
    portal_no_accounts: "No accounts registered yet.",
    portal_select_account: "Select an account to continue.",
    portal_secure_session: "Secure session",
    loading_cancel: "Esc to cancel",
    portal_signup_done: "Account created successfully",

    status_title: "System Status",
    status_subtitle: "Live operational status across every region",
    status_operational: "All systems operational",
    status_uptime: "Uptime",
    status_regions: "Regions",
    status_api: "API Availability",
    status_active_regions: "Active Regions",
    status_incidents: "Incident history",
    status_no_incidents: "No incidents reported in the last 90 days.",

    docs_title: "Documentation",
    docs_subtitle: "Everything you need to get started with Republic Cloud",
    docs_categories: &["Getting started", "Compute", "Storage", "Network", "API reference"],
    docs_welcome_title: "Welcome to the docs",
    docs_welcome_desc: "Documentation is being written. Check back soon.",

    not_found_title: "Page not found",
    not_found_desc: "The page you requested does not exist or has moved.",
    not_found_home: "Home",

    mobile_title: "Desktop recommended",
    mobile_body: "The Portal is not optimized for narrow screens and unexpected problems* may occur.",
    mobile_disclaimer: "*Disclaimer: we are not responsible for errors on mobile devices.",
    mobile_dont_show: "Don't show again",
    mobile_confirm: "OK",

    specs_title: "Specs",

    hint_pages: "←→ menu   Enter open   ↑↓ scroll   : go to   l/F2 language   q quit",
    hint_picker: "↑↓ select   Enter continue   l/F2 language   Esc exit",
    hint_form: "Tab/↑↓ field   Enter submit   F2 language   Esc back",

    footer_company: "Republic Cloud Inc.",
    footer_copyright: "© Republic Cloud. All rights reserved.",
};

pub fn login_success(lang: Language, email: &str) -> String {
    match lang {
        Language::Ko => format!("{email} 계정으로 로그인되었습니다."),
        Language::En => format!("Logged in as {email}"),
    }
}

pub fn accessing_as(lang: Language, name: &str) -> String {
    match lang {
        Language::Ko => format!("{name}님으로 접속합니다."),
        Language::En => format!("Accessing as {name}"),
    }
}
