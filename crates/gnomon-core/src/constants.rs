/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const POSTS_ROUTE_COMPONENT: &str = "posts";
pub const POSTS_ROUTE: &str = const_str::concat!(API_ROUTE_PREFIX, "/", POSTS_ROUTE_COMPONENT);

pub const CALENDAR_ROUTE_COMPONENT: &str = "calendar";
pub const CALENDAR_EVENTS_ROUTE: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CALENDAR_ROUTE_COMPONENT, "/events");

/// User-Agent sent by the upstream API client.
pub const USER_AGENT: &str = const_str::concat!("gnomon/", env!("CARGO_PKG_VERSION"));
