// Compiled-in fallback for the gateway base URL.  Deployments are expected to
// override it via the GATEWAY_BASE_URL build environment variable; resolution
// logs a warning when this literal ends up being used.
pub const DEFAULT_GATEWAY_URL: &str = "https://assessment-gateway-production.up.railway.app";

// Gateway endpoints
pub const INPUT_SUBMIT_PATH: &str = "/api/input";
pub const SURVEY_SUBMIT_PATH: &str = "/api/survey";
pub const SIGNUP_PATH: &str = "/signup";

// Page paths.  Routing itself lives outside this crate; these are the
// navigation targets the screens hand to the browser.
pub const LOGIN_PAGE: &str = "/login";
pub const SURVEY_PAGE: &str = "/survey";
pub const SIGNUP_PAGE: &str = "/user/signUp";
pub const DASHBOARD_PAGE: &str = "/dashboard";

// Delay before the survey screen navigates on to the dashboard (ms).
pub const SURVEY_REDIRECT_DELAY_MS: u32 = 1_000;
