//! HTML assembly for the check-update page
//!
//! The page shows the comparison result and counts down before redirecting
//! the visitor to the configured homepage. Version strings arriving here have
//! already been normalized (client side) or sanitized (reference side), so
//! they are safe to interpolate.

use crate::config::COUNTDOWN_SECS;
use crate::gate::compare::ComparisonOutcome;

/// Render the full check-update page for a comparison result.
pub fn render_check_page(
    outcome: ComparisonOutcome,
    client_version: &str,
    latest_version: &str,
    redirect_url: &str,
) -> String {
    let heading = match outcome {
        ComparisonOutcome::Current => "<h1>Your version is up to date</h1>\n".to_string(),
        ComparisonOutcome::Stale => format!(
            "<h1>\nYour version is {client_version}<br>\n\
             The last version is {latest_version}<br>\n \
             <br>\n<a href=\"{redirect_url}\">Upgrade</a>\n</h1>\n"
        ),
    };

    // The timer decrements before the first repaint, so the page displays
    // from one below the configured count.
    let displayed = COUNTDOWN_SECS - 1;

    format!(
        r#"<html><head>
<script type="text/javascript">
var sec={COUNTDOWN_SECS};
function starttimer() {{
	sec = sec - 1;
	if( sec >= 0 ) {{
		document.getElementById("t").innerHTML = sec;
		setTimeout( function(){{starttimer()}}, 1000 );
	}}
	else {{
		window.location = "{redirect_url}";
	}}
}}
</script>
<title>Version checker</title></head>
<body onLoad="starttimer();">
<center>
{heading} <br>You will be redirected in <div id="t">{displayed}</div> seconds.
</center>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_reports_up_to_date() {
        let page = render_check_page(
            ComparisonOutcome::Current,
            "1.2.3.4",
            "1.2.3.4",
            "https://example.com/",
        );

        assert!(page.contains("Your version is up to date"));
        assert!(!page.contains("Upgrade"));
    }

    #[test]
    fn stale_page_shows_both_versions_and_upgrade_link() {
        let page = render_check_page(
            ComparisonOutcome::Stale,
            "1.2.3.3",
            "1.2.3.4",
            "https://example.com/",
        );

        assert!(page.contains("Your version is 1.2.3.3"));
        assert!(page.contains("The last version is 1.2.3.4"));
        assert!(page.contains("<a href=\"https://example.com/\">Upgrade</a>"));
    }

    #[test]
    fn page_counts_down_and_redirects_to_homepage() {
        let page = render_check_page(
            ComparisonOutcome::Current,
            "1.2.3.4",
            "1.2.3.4",
            "https://example.com/",
        );

        assert!(page.contains("var sec=11;"));
        assert!(page.contains("<div id=\"t\">10</div>"));
        assert!(page.contains("window.location = \"https://example.com/\""));
    }
}
