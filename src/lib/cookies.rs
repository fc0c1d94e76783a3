//! Helpers for `document.cookie`. The session cookie itself is normally
//! `HttpOnly` and invisible here; logout still expires every readable cookie
//! so stale client-side values do not outlive the session.

/// Names of the cookies in a `document.cookie` string.
pub fn cookie_names(cookies: &str) -> Vec<String> {
    cookies
        .split(';')
        .filter_map(|pair| {
            let name = pair.split('=').next()?.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

/// Assignment that expires `name` on the root path.
pub fn expiry_assignment(name: &str) -> String {
    format!("{name}=; Max-Age=0; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

/// Expires every cookie visible to the page.
#[cfg(target_arch = "wasm32")]
pub fn clear_all() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    let cookies = document.cookie().unwrap_or_default();
    for name in cookie_names(&cookies) {
        let _ = document.set_cookie(&expiry_assignment(&name));
    }
}

#[cfg(test)]
mod tests {
    use super::{cookie_names, expiry_assignment};

    #[test]
    fn cookie_names_skips_blank_entries() {
        assert_eq!(
            cookie_names("theme=dark; lang=sv;  ;tracking="),
            vec!["theme", "lang", "tracking"]
        );
        assert!(cookie_names("").is_empty());
    }

    #[test]
    fn cookie_names_ignore_values() {
        assert_eq!(cookie_names("token=a=b; lang=sv"), vec!["token", "lang"]);
    }

    #[test]
    fn expiry_assignment_targets_root_path() {
        let assignment = expiry_assignment("lang");
        assert!(assignment.starts_with("lang=;"));
        assert!(assignment.ends_with("path=/"));
    }
}
