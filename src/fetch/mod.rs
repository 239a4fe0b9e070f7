mod commits;
mod detail;
mod search;


pub use commits::fetch_commits;
pub use detail::{locator_from_html_url, resolve_details};
pub use search::{dedup_by_url, search_pull_requests};
