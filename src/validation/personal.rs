use std::collections::HashSet;

/// Consumer mailbox providers that trigger the "work email preferred" warning.
pub const DEFAULT_PERSONAL_DOMAINS: [&str; 50] = [
    "icloud.com",
    "gmail.com",
    "outlook.com",
    "yahoo.com",
    "android.com",
    "hotmail.com",
    "live.com",
    "msn.com",
    "thunderbird.net",
    "samsung.com",
    "web.de",
    "gmx.de",
    "gmx.com",
    "aol.com",
    "protonmail.com",
    "zoho.com",
    "mail.com",
    "yandex.com",
    "me.com",
    "mac.com",
    "fastmail.com",
    "tutanota.com",
    "hey.com",
    "icloud.co.uk",
    "outlook.co.uk",
    "hotmail.co.uk",
    "btinternet.com",
    "virginmedia.com",
    "ntlworld.com",
    "talktalk.net",
    "blueyonder.co.uk",
    "mail.ru",
    "qq.com",
    "163.com",
    "126.com",
    "naver.com",
    "hanmail.net",
    "daum.net",
    "seznam.cz",
    "laposte.net",
    "orange.fr",
    "free.fr",
    "sfr.fr",
    "shaw.ca",
    "rogers.com",
    "telus.net",
    "cox.net",
    "comcast.net",
    "att.net",
    "bellsouth.net",
];

/// Immutable set of personal (consumer) email domains.
///
/// Built once at start-up and shared read-only afterwards. Entries are
/// stored lower-cased; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct PersonalDomains {
    domains: HashSet<String>,
}

impl Default for PersonalDomains {
    fn default() -> Self {
        Self {
            domains: DEFAULT_PERSONAL_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl PersonalDomains {
    /// The default table plus `extra` entries. Blank entries are skipped.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.domains.extend(
            extra
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty()),
        );
        set
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_fifty_distinct_entries() {
        let set = PersonalDomains::default();
        assert_eq!(set.len(), 50);
        assert!(!set.is_empty());
    }

    #[test]
    fn default_entries_are_lower_case() {
        for domain in DEFAULT_PERSONAL_DOMAINS {
            assert_eq!(domain, domain.to_lowercase());
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let set = PersonalDomains::default();
        assert!(set.contains("gmail.com"));
        assert!(set.contains("GMAIL.COM"));
        assert!(set.contains("Hotmail.Co.Uk"));
        assert!(!set.contains("acme.com"));
    }

    #[test]
    fn subdomains_are_not_personal() {
        let set = PersonalDomains::default();
        assert!(!set.contains("eu.gmail.com"));
    }

    #[test]
    fn extra_entries_are_normalised() {
        let set = PersonalDomains::with_extra([" Example.ORG ", "", "  ", "gmail.com"]);
        assert!(set.contains("example.org"));
        // Blank entries dropped, duplicate of a default entry collapsed.
        assert_eq!(set.len(), 51);
    }
}
