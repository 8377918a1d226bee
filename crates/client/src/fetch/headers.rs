//! Browser identity header profiles.
//!
//! Every request picks one profile uniformly at random so that repeated
//! requests do not all present the same client fingerprint.

use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// A named set of request headers. Header names must be lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderProfile {
    pub name: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
}

impl HeaderProfile {
    pub fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in self.headers {
            map.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        map
    }

    pub fn user_agent(&self) -> Option<&'static str> {
        self.headers.iter().find(|(name, _)| *name == "user-agent").map(|(_, value)| *value)
    }
}

const fn ua(name: &'static str, headers: &'static [(&'static str, &'static str)]) -> HeaderProfile {
    HeaderProfile { name, headers }
}

/// Desktop and TV browser profiles.
pub const BROWSER_PROFILES: &[HeaderProfile] = &[
    ua("chrome-95", &[
        (
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/95.0.4638.69 Safari/537.36",
        ),
        (
            "accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9",
        ),
        ("sec-fetch-site", "cross-site"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-user", "?1"),
        ("sec-fetch-dest", "document"),
        ("referer", "https://www.google.com/"),
        ("accept-language", "en-US,en;q=0.9"),
    ]),
    ua("edge-95", &[
        (
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/95.0.4638.69 Safari/537.36 Edg/95.0.1020.44",
        ),
        (
            "accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9",
        ),
        ("sec-fetch-site", "cross-site"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-user", "?1"),
        ("sec-fetch-dest", "document"),
        ("referer", "https://www.bing.com/"),
        ("accept-language", "en-US,en;q=0.9"),
    ]),
    ua("firefox-89", &[
        ("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0"),
        ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
        ("accept-language", "en-US,en;q=0.5"),
        ("referer", "https://www.google.com/"),
        ("upgrade-insecure-requests", "1"),
        ("te", "trailers"),
    ]),
    ua("safari-14-mac", &[(
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Safari/605.1.15",
    )]),
    ua("safari-13-mac", &[(
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1.2 Safari/605.1.15",
    )]),
    ua("webkit-mac", &[("user-agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_5) AppleWebKit/605.1.15 (KHTML, like Gecko)")]),
    ua("safari-11-mac", &[(
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.1.2 Safari/605.1.15",
    )]),
    ua("firefox-33-mac", &[("user-agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10; rv:33.0) Gecko/20100101 Firefox/33.0")]),
    ua("chrome-44-linux", &[(
        "user-agent",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/44.0.2403.157 Safari/537.36",
    )]),
    ua("firefox-24-ubuntu", &[("user-agent", "Mozilla/5.0 (X11; Ubuntu; Linux i686; rv:24.0) Gecko/20100101 Firefox/24.0")]),
    ua("chrome-80-linux", &[(
        "user-agent",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.87 Safari/537.36",
    )]),
    ua("firefox-65-ubuntu", &[("user-agent", "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:65.0) Gecko/20100101 Firefox/65.0")]),
    ua("chrome-72-win", &[(
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/72.0.3626.121 Safari/537.36",
    )]),
    ua("chrome-74-win", &[(
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.169 Safari/537.36",
    )]),
    ua("ie-11", &[("user-agent", "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko")]),
    ua("ie-9", &[("user-agent", "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; WOW64; Trident/5.0; KTXN)")]),
    ua("edge-18", &[(
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36 Edge/18.17763",
    )]),
    ua("chrome-92-win", &[(
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.131 Safari/537.36",
    )]),
    ua("chrome-93-win", &[(
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.82 Safari/537.36",
    )]),
    ua("opera-12-tv", &[(
        "user-agent",
        "Opera/9.80 (Linux armv7l) Presto/2.12.407 Version/12.51 , D50u-D1-UHD/V1.5.16-UHD (Vizio, D50u-D1, Wireless)",
    )]),
    ua("chrome-93-cros", &[(
        "user-agent",
        "Mozilla/5.0 (X11; CrOS x86_64 14092.57.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.85 Safari/537.36",
    )]),
];

/// Process-wide pool of header profiles to rotate through.
#[derive(Debug, Clone)]
pub struct HeaderRotation {
    profiles: Vec<HeaderProfile>,
}

impl HeaderRotation {
    pub fn new(profiles: Vec<HeaderProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in browser pool.
    pub fn browsers() -> Self {
        Self::new(BROWSER_PROFILES.to_vec())
    }

    /// Choose one profile uniformly at random, independent of earlier picks.
    pub fn pick(&self) -> Option<&HeaderProfile> {
        self.profiles.choose(&mut rand::thread_rng())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for HeaderRotation {
    fn default() -> Self {
        Self::browsers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_profile_builds_a_header_map() {
        for profile in BROWSER_PROFILES {
            let map = profile.header_map();
            assert_eq!(map.len(), profile.headers.len(), "{}", profile.name);
            assert!(profile.user_agent().is_some(), "{} has no user-agent", profile.name);
        }
    }

    #[test]
    fn test_profile_names_unique() {
        let names: HashSet<&str> = BROWSER_PROFILES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), BROWSER_PROFILES.len());
    }

    #[test]
    fn test_pick_from_pool() {
        let rotation = HeaderRotation::browsers();
        assert_eq!(rotation.len(), BROWSER_PROFILES.len());
        for _ in 0..50 {
            let picked = rotation.pick().unwrap();
            assert!(BROWSER_PROFILES.contains(picked));
        }
    }

    #[test]
    fn test_pick_reaches_more_than_one_profile() {
        let rotation = HeaderRotation::browsers();
        let seen: HashSet<&str> = (0..200).filter_map(|_| rotation.pick()).map(|p| p.name).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_pick_empty_pool() {
        let rotation = HeaderRotation::new(Vec::new());
        assert!(rotation.is_empty());
        assert!(rotation.pick().is_none());
    }
}
