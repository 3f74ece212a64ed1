use std::time::Duration;

/// Request-level settings for a scraping run.
///
/// The upstream site is touched through a fixed URL template with two slots:
/// job title slug first, city slug second. Header values mimic a desktop
/// browser; benchmark pages are served differently to bare clients.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Two `{}` placeholders: job title, then city.
    pub url_template: String,
    pub user_agent: String,
    pub accept_language: String,
    pub request_timeout: Duration,
    /// Pause between successive requests.
    pub request_delay: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            url_template: "https://www.salary.com/research/salary/benchmark/{}-salary/{}"
                .to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/97.0.4692.99 Safari/537.36"
                .to_string(),
            accept_language: "en-US, en;q=0.5".to_string(),
            request_timeout: Duration::from_secs(30),
            request_delay: Duration::from_millis(500),
        }
    }
}

impl ScrapeConfig {
    /// Build the benchmark page URL for one (job title, city) pair.
    /// No slug validation; a bad slug just produces a URL that 404s.
    pub fn benchmark_url(&self, job_title: &str, city: &str) -> String {
        self.url_template
            .replacen("{}", job_title, 1)
            .replacen("{}", city, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn url_contains_both_slugs_in_template_positions() {
        let config = ScrapeConfig::default();
        let url = config.benchmark_url("devops-engineer-i", "orlando-fl");
        assert_eq!(
            url,
            "https://www.salary.com/research/salary/benchmark/devops-engineer-i-salary/orlando-fl"
        );
    }

    #[test]
    fn built_url_is_well_formed() {
        let config = ScrapeConfig::default();
        let url = config.benchmark_url("data-scientist-i", "new-york-ny");
        let parsed = Url::parse(&url).expect("built URL should parse");
        assert_eq!(parsed.host_str(), Some("www.salary.com"));
        assert!(parsed.path().contains("data-scientist-i"));
        assert!(parsed.path().ends_with("new-york-ny"));
    }

    #[test]
    fn custom_template_is_respected() {
        let config = ScrapeConfig {
            url_template: "http://localhost/jobs/{}/in/{}".to_string(),
            ..ScrapeConfig::default()
        };
        assert_eq!(
            config.benchmark_url("welder", "tampa-fl"),
            "http://localhost/jobs/welder/in/tampa-fl"
        );
    }
}
