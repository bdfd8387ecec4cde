pub mod config;
pub mod export;
pub mod http_client;
pub mod name_match;
pub mod normalize;
pub mod rankings_fetch;
pub mod reconcile;
pub mod roster_fetch;
pub mod sheet_fetch;
pub mod team_codes;
