pub mod host_identity;
