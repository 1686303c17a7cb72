use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use buoy_map_core::{parse_str, Column, MalformedPolicy};
use buoymap::{app, AppState};
use hyper::{header, Method};
use std::sync::Arc;
use tower::ServiceExt;

/// Three placed stations, one without coordinates and one truncated line
pub const FEED: &str = "\
#STN     LAT      LON  YYYY MM DD hh mm WDIR WSPD   GST WVHT  DPD APD MWD   PRES  PTDY  ATMP  WTMP  DEWP  VIS   TIDE
#text    deg      deg   yr mo dy hr mn degT  m/s   m/s   m   sec sec degT   hPa   hPa  degC  degC  degC  nmi     ft
41001  32.382  -75.402 2017 07 04 16 50 200   7.0   9.0  1.2   6  4.8 170 1017.4  +0.3  10.0  28.1  22.4   MM     MM
41002  31.760  -74.840 2017 07 04 16 50 210   6.0   8.0  1.1   7  4.9 160 1017.9  +0.1    MM  27.5  21.0   MM     MM
41005  31.000  -80.000 2017
41004  32.501  -79.099 2017 07 04 16 50 220   5.0   6.0  0.9   8  5.0 150 1018.2  -0.2  30.0  28.8  23.3   MM     MM
46042      MM       MM 2017 07 04 16 50 220   5.0   6.0  0.9   8  5.0 150 1018.2  -0.2  20.0  28.8    MM   MM     MM
";

pub struct TestApp {
    pub app: Router,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with_columns(Column::ALL.to_vec())
}

/// App whose selectors only offer `columns`
pub fn spawn_app_with_columns(columns: Vec<Column>) -> TestApp {
    let dataset = parse_str(FEED, MalformedPolicy::Skip).expect("test feed should parse");
    let app_state = AppState {
        static_dir: String::from("./static"),
        remote_url: String::from("http://127.0.0.1:5006"),
        feed_path: String::from("./data/latest_obs.txt"),
        dataset: Arc::new(dataset),
        columns,
    };

    TestApp {
        app: app(app_state),
    }
}

impl TestApp {
    /// GET `uri`, returning the status and the body as text
    pub async fn get(&self, uri: &str) -> (u16, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "*/*")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status().as_u16();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}
