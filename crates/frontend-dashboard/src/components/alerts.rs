//! Inline outcome banners for report generation

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert">
            <span class="block sm:inline">{props.message.to_string()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportReadyAlertProps {
    /// Absolute URL of the generated report
    pub url: AttrValue,
}

#[function_component(ReportReadyAlert)]
pub fn report_ready_alert(props: &ReportReadyAlertProps) -> Html {
    html! {
        <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded relative mb-4" role="alert">
            <span class="block sm:inline">{"Report generated successfully!"}</span>
            <div class="mt-2">
                <a
                    href={props.url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600"
                >
                    {"View Report"}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_error_text_is_rendered_verbatim() {
        let html = ServerRenderer::<ErrorAlert>::with_props(|| ErrorAlertProps {
            message: "boom".into(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(html.contains(">boom<"));
    }

    #[tokio::test]
    async fn test_report_link_opens_new_tab() {
        let html = ServerRenderer::<ReportReadyAlert>::with_props(|| ReportReadyAlertProps {
            url: "http://localhost:5000/files/r1.pdf".into(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(html.contains(r#"href="http://localhost:5000/files/r1.pdf""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("View Report"));
    }
}
