use serde::{Deserialize, Serialize};

/// One measurement of the page taken on scroll or resize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub body_height: f64,
    pub viewport_height: f64,
    pub scroll_y: f64,
}

impl ScrollMetrics {
    /// True once the bottom of the viewport is within a quarter viewport of
    /// the end of the page.
    pub fn near_bottom(&self) -> bool {
        let threshold = self.body_height - self.viewport_height / 4.0;
        let position = self.scroll_y + self.viewport_height;
        position >= threshold
    }
}

#[cfg(target_arch = "wasm32")]
pub fn measure_window() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let body = window.document()?.body()?;
    Some(ScrollMetrics {
        body_height: body.offset_height() as f64,
        viewport_height: window.inner_height().ok()?.as_f64()?,
        scroll_y: window.scroll_y().ok()?,
    })
}

#[cfg(not(target_arch = "wasm32"))]
const MEASURE_PAGE_JS: &str = r#"
return {
    body_height: document.body.offsetHeight,
    viewport_height: window.innerHeight,
    scroll_y: window.scrollY,
};
"#;

/// Reads the page position through the webview.
#[cfg(not(target_arch = "wasm32"))]
pub async fn measure_page() -> Option<ScrollMetrics> {
    match dioxus::prelude::document::eval(MEASURE_PAGE_JS)
        .join::<ScrollMetrics>()
        .await
    {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            tracing::warn!("Failed to measure page: {err:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(body_height: f64, viewport_height: f64, scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            body_height,
            viewport_height,
            scroll_y,
        }
    }

    #[test]
    fn top_of_a_long_page_is_not_near_bottom() {
        assert!(!metrics(4000.0, 800.0, 0.0).near_bottom());
    }

    #[test]
    fn within_a_quarter_viewport_triggers() {
        // threshold = 4000 - 200 = 3800, position = 3000 + 800
        assert!(metrics(4000.0, 800.0, 3000.0).near_bottom());
        assert!(!metrics(4000.0, 800.0, 2999.0).near_bottom());
    }

    #[test]
    fn short_page_is_always_near_bottom() {
        assert!(metrics(600.0, 800.0, 0.0).near_bottom());
    }

    #[tokio::test]
    async fn throttled_measurement_sees_the_end_of_a_burst() {
        use crate::throttle::Throttle;
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        let page = Rc::new(Cell::new(metrics(4000.0, 800.0, 0.0)));
        let seen = Rc::new(RefCell::new(None));
        let throttle = Throttle::new(10);

        let mut pending = Vec::new();
        for scroll_y in [0.0, 1500.0, 3200.0] {
            page.set(metrics(4000.0, 800.0, scroll_y));
            let page = page.clone();
            let seen = seen.clone();
            if let Some(task) = throttle.defer(move || *seen.borrow_mut() = Some(page.get())) {
                pending.push(task);
            }
        }
        for task in pending {
            task.await;
        }

        let measured = seen.borrow().expect("measurement ran");
        assert_eq!(measured.scroll_y, 3200.0);
        assert!(measured.near_bottom());
    }

    #[test]
    fn decodes_measurement_payload() {
        let probe: ScrollMetrics = serde_json::from_str(
            r#"{"body_height":2000,"viewport_height":900,"scroll_y":1200.5}"#,
        )
        .unwrap();
        assert_eq!(probe.scroll_y, 1200.5);
        assert!(probe.near_bottom());
    }
}
