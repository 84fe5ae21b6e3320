pub mod client;
pub mod config;
pub mod rpc {
    include!("google.rpc.rs");
}
pub mod datatransfer {
    pub mod v1 {
        include!("datatransfer.v1.rs");
    }
    pub const ENDPOINT: &str = "https://bigquerydatatransfer.googleapis.com";
}
