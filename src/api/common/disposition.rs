//
//  backlog-client
//  api/common/disposition.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Download filename resolution.

use url::Url;

/// Extracts the filename from a `Content-Disposition` header value.
///
/// The extended `filename*=` form wins over plain `filename=`. For the
/// extended form the `charset'language'` prefix is dropped and the rest is
/// percent-decoded (kept as is if it does not decode to UTF-8). Directory
/// components are stripped.
///
/// ```rust
/// use backlog_client::api::common::filename_from_content_disposition;
///
/// assert_eq!(
///     filename_from_content_disposition("attachment; filename*=UTF-8''example.png").as_deref(),
///     Some("example.png")
/// );
/// assert_eq!(
///     filename_from_content_disposition(r#"attachment; filename="report.pdf""#).as_deref(),
///     Some("report.pdf")
/// );
/// ```
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    if let Some(raw) = parameter(header, "filename*=") {
        let encoded = match raw.splitn(3, '\'').collect::<Vec<_>>().as_slice() {
            [_charset, _lang, rest] => *rest,
            _ => raw,
        };
        let decoded = urlencoding::decode(encoded)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| encoded.to_string());
        if let Some(name) = sanitize(&decoded) {
            return Some(name);
        }
    }

    parameter(header, "filename=").and_then(sanitize)
}

/// Last path segment of `url`, if any.
pub fn filename_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    sanitize(&decoded)
}

fn parameter<'a>(header: &'a str, marker: &str) -> Option<&'a str> {
    let lower = header.to_ascii_lowercase();
    let mut search = 0;
    while let Some(pos) = lower[search..].find(marker) {
        let start = search + pos;
        // skip matches inside another token such as `myfilename=`
        let boundary = start == 0
            || matches!(lower.as_bytes()[start - 1], b';' | b' ' | b'\t');
        if boundary {
            let value = &header[start + marker.len()..];
            let value = value.split(';').next().unwrap_or_default();
            return Some(value.trim().trim_matches('"').trim());
        }
        search = start + marker.len();
    }
    None
}

fn sanitize(name: &str) -> Option<String> {
    let name = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default().trim();
    match name {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_filename() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename*=UTF-8''example.png"),
            Some("example.png".to_string())
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename*=UTF-8''%E4%BB%95%E6%A7%98.txt"),
            Some("仕様.txt".to_string())
        );
    }

    #[test]
    fn test_extended_preferred_over_plain() {
        let header = r#"attachment; filename="fallback.txt"; filename*=UTF-8''real.txt"#;
        assert_eq!(filename_from_content_disposition(header), Some("real.txt".to_string()));
    }

    #[test]
    fn test_undecodable_kept_raw() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename*=UTF-8''bad%FF.bin"),
            Some("bad%FF.bin".to_string())
        );
    }

    #[test]
    fn test_directory_components_stripped() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="../../etc/passwd""#),
            Some("passwd".to_string())
        );
        assert_eq!(filename_from_content_disposition(r#"attachment; filename="..""#), None);
        assert_eq!(filename_from_content_disposition("inline"), None);
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://acme.backlog.com/api/v2/users/12/icon?apiKey=x"),
            Some("icon".to_string())
        );
        assert_eq!(filename_from_url("https://acme.backlog.com/"), None);
    }
}
