/*!
`arrkit` is a typed client for the [Lidarr](https://lidarr.audio) API, with a small CLI on top.

Every response is hydrated into plain records that never fail to build: missing keys take
defaults, unknown keys are ignored and nested objects are always present.
 */

pub mod cli;
pub mod config;
pub mod error;
pub mod http_client;
pub mod lidarr;
pub mod logger;
