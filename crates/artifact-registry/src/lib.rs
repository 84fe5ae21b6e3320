pub mod client;
pub mod config;
pub mod artifactregistry {
    pub mod v1beta2 {
        include!("artifactregistry.v1beta2.rs");
    }
    pub const ENDPOINT: &str = "https://artifactregistry.googleapis.com";
}
