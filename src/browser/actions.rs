//! Page interaction primitives
//!
//! Form filling, clicking, and content injection against a live page.
//! Controls can be located three ways: by CSS selector, by accessible
//! label (label[for], wrapping label, or aria-label), or by ARIA role
//! plus accessible name. Fills set the control value through the native
//! property setter and dispatch input/change events so framework-bound
//! forms observe the change.

use crate::browser::PageHandle;
use crate::error::{ActionError, Error, Result};
use tracing::{debug, instrument};

/// Escape a string for embedding in a quoted JavaScript literal
fn escape_js(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// CSS candidates for an ARIA role, including intrinsic elements
fn role_candidates(role: &str) -> String {
    match role {
        "button" => r#"button, input[type="submit"], input[type="button"], [role="button"]"#
            .to_string(),
        "link" => r#"a[href], [role="link"]"#.to_string(),
        "textbox" => {
            r#"input:not([type]), input[type="text"], input[type="email"], input[type="password"], textarea, [role="textbox"]"#
                .to_string()
        }
        other => format!(r#"[role="{}"]"#, escape_js(other)),
    }
}

/// Shared fill script: resolve a control, set its value, fire events
fn fill_script(resolver: &str, value: &str) -> String {
    format!(
        r#"
        (() => {{
            const input = {resolver};
            if (!input) return false;
            const proto = input.tagName === 'TEXTAREA'
                ? HTMLTextAreaElement.prototype
                : HTMLInputElement.prototype;
            const descriptor = Object.getOwnPropertyDescriptor(proto, 'value');
            if (descriptor && descriptor.set) {{
                descriptor.set.call(input, '{value}');
            }} else {{
                input.value = '{value}';
            }}
            input.dispatchEvent(new Event('input', {{ bubbles: true }}));
            input.dispatchEvent(new Event('change', {{ bubbles: true }}));
            return true;
        }})()
        "#,
        resolver = resolver,
        value = escape_js(value),
    )
}

/// Page interaction entry points
pub struct PageActions;

impl PageActions {
    /// Fill a form control located by its accessible label
    #[instrument(skip(page, value))]
    pub async fn fill_by_label(page: &PageHandle, label: &str, value: &str) -> Result<()> {
        let escaped = escape_js(label);
        let resolver = format!(
            r#"(() => {{
                const labels = Array.from(document.querySelectorAll('label'));
                const label = labels.find(l => l.textContent.trim() === '{escaped}');
                if (label) {{
                    if (label.htmlFor) return document.getElementById(label.htmlFor);
                    const nested = label.querySelector('input, textarea, select');
                    if (nested) return nested;
                }}
                return document.querySelector('[aria-label="{escaped}"]');
            }})()"#,
        );

        let filled = Self::eval_bool(page, &fill_script(&resolver, value)).await?;
        if !filled {
            return Err(ActionError::ElementNotFound(format!("label: {}", label)).into());
        }

        debug!("Filled control labelled: {}", label);
        Ok(())
    }

    /// Fill a form control located by CSS selector
    #[instrument(skip(page, value))]
    pub async fn fill(page: &PageHandle, selector: &str, value: &str) -> Result<()> {
        let resolver = format!("document.querySelector('{}')", escape_js(selector));

        let filled = Self::eval_bool(page, &fill_script(&resolver, value)).await?;
        if !filled {
            return Err(ActionError::ElementNotFound(format!("selector: {}", selector)).into());
        }

        debug!("Filled control: {}", selector);
        Ok(())
    }

    /// Click the first element matching a CSS selector
    #[instrument(skip(page))]
    pub async fn click(page: &PageHandle, selector: &str) -> Result<()> {
        let element = page
            .page
            .find_element(selector)
            .await
            .map_err(|_| ActionError::ElementNotFound(format!("selector: {}", selector)))?;

        element
            .click()
            .await
            .map_err(|e| ActionError::ClickFailed(format!("{}: {}", selector, e)))?;

        debug!("Clicked: {}", selector);
        Ok(())
    }

    /// Click an element located by ARIA role and accessible name
    #[instrument(skip(page))]
    pub async fn click_by_role(page: &PageHandle, role: &str, name: &str) -> Result<()> {
        let script = format!(
            r#"
            (() => {{
                const candidates = Array.from(document.querySelectorAll('{candidates}'));
                const accessibleName = (el) => {{
                    const aria = el.getAttribute('aria-label');
                    if (aria) return aria.trim();
                    if (el.tagName === 'INPUT') return (el.value || '').trim();
                    return (el.textContent || '').trim();
                }};
                const el = candidates.find(c => accessibleName(c) === '{name}');
                if (!el) return false;
                el.click();
                return true;
            }})()
            "#,
            candidates = escape_js(&role_candidates(role)),
            name = escape_js(name),
        );

        let clicked = Self::eval_bool(page, &script).await?;
        if !clicked {
            return Err(ActionError::ElementNotFound(format!("{} \"{}\"", role, name)).into());
        }

        debug!("Clicked {} named: {}", role, name);
        Ok(())
    }

    /// Append filler paragraphs to a container to force vertical scroll
    ///
    /// Returns the number of paragraphs appended: `count` when the container
    /// matched, 0 when it did not (the injection is then a no-op).
    #[instrument(skip(page))]
    pub async fn inject_filler(
        page: &PageHandle,
        container_selector: &str,
        count: u32,
    ) -> Result<u32> {
        let script = format!(
            r#"
            (() => {{
                const container = document.querySelector('{selector}');
                if (!container) return 0;
                for (let i = 0; i < {count}; i++) {{
                    const p = document.createElement('p');
                    p.textContent = 'This is a long line of text to make the page scroll. Line ' + (i + 1);
                    p.style.marginBottom = '20px';
                    container.appendChild(p);
                }}
                return {count};
            }})()
            "#,
            selector = escape_js(container_selector),
            count = count,
        );

        let injected = page
            .page
            .evaluate(script.as_str())
            .await
            .map_err(|e| ActionError::JsExecutionFailed(e.to_string()))?
            .into_value::<u32>()
            .map_err(|e| ActionError::JsExecutionFailed(e.to_string()))?;

        debug!(
            "Injected {} filler paragraphs into {}",
            injected, container_selector
        );
        Ok(injected)
    }

    /// Evaluate a script that reports success as a boolean
    async fn eval_bool(page: &PageHandle, script: &str) -> Result<bool> {
        page.page
            .evaluate(script)
            .await
            .map_err(|e| Error::from(ActionError::JsExecutionFailed(e.to_string())))?
            .into_value::<bool>()
            .map_err(|e| ActionError::JsExecutionFailed(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_js_quotes_and_backslashes() {
        assert_eq!(escape_js("plain"), "plain");
        assert_eq!(escape_js("it's"), "it\\'s");
        assert_eq!(escape_js(r"lg\:p-8"), r"lg\\:p-8");
        assert_eq!(escape_js("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_js("a\nb"), "a\\nb");
    }

    #[test]
    fn test_role_candidates_button() {
        let candidates = role_candidates("button");
        assert!(candidates.contains("button"));
        assert!(candidates.contains(r#"input[type="submit"]"#));
        assert!(candidates.contains(r#"[role="button"]"#));
    }

    #[test]
    fn test_role_candidates_fallback() {
        assert_eq!(role_candidates("tab"), r#"[role="tab"]"#);
    }

    #[test]
    fn test_fill_script_dispatches_events() {
        let script = fill_script("document.querySelector('input')", "user@example.com");
        assert!(script.contains("user@example.com"));
        assert!(script.contains("new Event('input', { bubbles: true })"));
        assert!(script.contains("new Event('change', { bubbles: true })"));
    }

    #[test]
    fn test_fill_script_escapes_value() {
        let script = fill_script("x", "o'brien");
        assert!(script.contains("o\\'brien"));
    }
}
