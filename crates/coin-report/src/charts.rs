//! Plotly 차트 명세.
//!
//! Plotly.js가 그대로 읽을 수 있는 `{ data, layout }` JSON을 생성합니다.

use coin_core::{Coin, PriceSeries};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::Result;

const PRICE_HOVER: &str = "<b>$%{y:,.2f}</b><br>%{x}<extra></extra>";
const VOLUME_HOVER: &str = "<b>$%{y:,.0f}</b><br>%{x}<extra></extra>";

/// Plotly figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// 단일 trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub height: u32,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Figure {
    /// Plotly.js용 JSON 문자열
    ///
    /// `<script>` 안에 그대로 삽입되므로 `<`는 `\u003c`로 이스케이프합니다.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    /// 레이아웃 제목
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

impl Layout {
    fn new(title: String, y_title: &str, height: u32) -> Self {
        Self {
            title: Title { text: title },
            xaxis: Axis {
                title: Title {
                    text: "Date".to_string(),
                },
            },
            yaxis: Axis {
                title: Title {
                    text: y_title.to_string(),
                },
            },
            height,
            showlegend: false,
        }
    }
}

fn dates(series: &PriceSeries) -> Vec<String> {
    series.iter().map(|p| p.date.to_string()).collect()
}

/// 가격 라인 차트
pub fn render_price_chart(coin: &Coin, series: &PriceSeries) -> Figure {
    let prices = series
        .iter()
        .map(|p| p.price.to_f64().unwrap_or_default())
        .collect();

    Figure {
        data: vec![Trace {
            trace_type: "scatter".to_string(),
            x: dates(series),
            y: prices,
            name: format!("{} Price", coin.name),
            mode: Some("lines".to_string()),
            line: Some(Line {
                color: "orange".to_string(),
                width: 2,
            }),
            marker: None,
            hovertemplate: PRICE_HOVER.to_string(),
        }],
        layout: Layout::new(format!("{} Price Over Time", coin.name), "Price (USD)", 600),
    }
}

/// 24시간 거래량 막대 차트
pub fn render_volume_chart(coin: &Coin, series: &PriceSeries) -> Figure {
    let volumes = series.iter().map(|p| p.volume as f64).collect();

    Figure {
        data: vec![Trace {
            trace_type: "bar".to_string(),
            x: dates(series),
            y: volumes,
            name: "24h Volume".to_string(),
            mode: None,
            line: None,
            marker: Some(Marker {
                color: "lightblue".to_string(),
            }),
            hovertemplate: VOLUME_HOVER.to_string(),
        }],
        layout: Layout::new(
            format!("{} 24h Trading Volume", coin.name),
            "Volume (USD)",
            400,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use coin_core::PricePoint;
    use rust_decimal_macros::dec;

    fn sample() -> PriceSeries {
        let day = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 1, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        PriceSeries::new(vec![
            PricePoint::from_datetime(day(1), dec!(42265.19), 827_600_123_456, 14_120_000_001),
            PricePoint::from_datetime(day(2), dec!(44167.33), 865_000_000_000, 18_000_000_000),
        ])
        .unwrap()
    }

    #[test]
    fn test_price_chart_figure() {
        let fig = render_price_chart(&Coin::bitcoin(), &sample());
        let json: serde_json::Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();

        let trace = &json["data"][0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "lines");
        assert_eq!(trace["name"], "Bitcoin Price");
        assert_eq!(trace["line"]["color"], "orange");
        assert_eq!(trace["line"]["width"], 2);
        assert_eq!(trace["x"][1], "2024-01-02");
        assert_eq!(trace["y"][0], 42265.19);
        assert!(trace.get("marker").is_none());

        assert_eq!(json["layout"]["title"]["text"], "Bitcoin Price Over Time");
        assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Price (USD)");
        assert_eq!(json["layout"]["height"], 600);
        assert_eq!(json["layout"]["showlegend"], false);
    }

    #[test]
    fn test_volume_chart_figure() {
        let fig = render_volume_chart(&Coin::bitcoin(), &sample());

        assert_eq!(fig.title(), "Bitcoin 24h Trading Volume");
        assert_eq!(fig.layout.height, 400);

        let trace = &fig.data[0];
        assert_eq!(trace.trace_type, "bar");
        assert_eq!(trace.name, "24h Volume");
        assert_eq!(trace.y, vec![14_120_000_001.0, 18_000_000_000.0]);
        assert_eq!(trace.hovertemplate, "<b>$%{y:,.0f}</b><br>%{x}<extra></extra>");
        assert!(trace.mode.is_none());
    }

    #[test]
    fn test_json_safe_inside_script_tag() {
        let coin = Coin::new("evil", "</script><script>alert(1)</script>");
        let fig = render_price_chart(&coin, &sample());

        let json = fig.to_json().unwrap();

        assert!(!json.contains('<'));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["data"][0]["name"], format!("{} Price", coin.name));
        assert_eq!(parsed["data"][0]["hovertemplate"], PRICE_HOVER);
    }
}
