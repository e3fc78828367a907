use nutype::nutype;
use once_cell::sync::Lazy;
use regex::Regex;

static API_KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{32}$").unwrap());
static LIDARR_URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+(/[^\s]*)?$").unwrap());

#[nutype(
    derive(Clone, Debug, Default, Deserialize, Display, Serialize, AsRef, Deref, PartialEq),
    default = "00000000000000000000000000000000",
    sanitize(trim),
    validate(not_empty, regex = API_KEY_REGEX)
)]
pub struct ApiKey(String);


#[nutype(
    derive(Clone, Debug, Default, Deserialize, Display, Serialize, AsRef, Deref, PartialEq),
    default = "http://127.0.0.1:8686",
    sanitize(trim),
    validate(not_empty, regex = LIDARR_URL_REGEX)
)]
pub struct LidarrUrl(String);
