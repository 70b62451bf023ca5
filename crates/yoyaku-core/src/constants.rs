/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";

pub const EVENTS_ROUTE_COMPONENT: &str = "events";
pub const BOOKINGS_ROUTE_COMPONENT: &str = "bookings";

/// Header carrying the verified host identity, attached by the auth
/// collaborator in front of this service. The engine trusts it as-is.
pub const HOST_ID_HEADER: &str = "x-host-id";
