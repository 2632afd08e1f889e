use std::fs;
use synology_download_station::station::DownloadStation;
use wiremock::MockServer;

/// # Panics
///
/// Will panic if a file can't be read or missing
#[must_use = "This function returns the body of the file as a string"]
pub fn body_from_file(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}

/// Builds a `DownloadStation` pointed at the mock server
///
/// # Panics
///
/// Will panic if the station can't be built
#[must_use]
pub fn station_for(server: &MockServer) -> DownloadStation {
    let address = server.address();
    DownloadStation::builder()
        .host(address.ip().to_string())
        .port(address.port())
        .build()
        .expect("Failed to build DownloadStation")
}
