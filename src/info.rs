use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub title: &'static str,
    pub intro: &'static str,
    pub guidelines: &'static [&'static str],
}

const GUIDELINES: &[&str] = &[
    "Describe what you eat and drink",
    "Include brand names when applicable",
    "Specify quantities in precise measurements",
    "For restaurant meals, note the establishment",
    "Fill out the diary individually without assistance from other players",
    "Contact your trainer if you need help",
];

pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        title: "Extra Information",
        intro: "Please provide as accurate as possible information about everything \
                you eat and drink during the day.",
        guidelines: GUIDELINES,
    })
}
