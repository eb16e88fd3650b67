// Symbol fetched when none is given.
pub const DEFAULT_SYMBOL: &str = "005930.KS";

// Backend address when neither --base-url nor quote_api_base_url is set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// Environment variable consulted for the backend address.
pub const BASE_URL_ENV: &str = "quote_api_base_url";

// Text written to the label region.
pub const SYMBOL_LABEL_PREFIX: &str = "Symbol: ";
pub const EMPTY_RESULT_MESSAGE: &str = "No data available.";
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching data.";

// Element ids of the two display regions.
pub const LABEL_REGION_ID: &str = "stock-symbol";
pub const BODY_REGION_ID: &str = "stock-data";
