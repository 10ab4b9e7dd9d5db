use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fetch::{fetch_with_retry, RetryPolicy};
use crate::salary;
use crate::stats::{JobsReport, LanguageStats, SalaryAccumulator};

const API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const API_KEY_HEADER: &str = "X-Api-App-Id";
const API_KEY_VAR: &str = "SJ_API_APP_KEY";

/// "Разработка, программирование" catalogue on superjob.ru.
const PROGRAMMER_CATALOGUE_ID: u32 = 48;
const VACANCIES_PER_PAGE: u32 = 40;

/// Credentials for the SuperJob API, read from the environment at
/// startup so a missing key fails before any network traffic.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| Error::MissingConfig(API_KEY_VAR))?;
        Ok(Self { api_key })
    }
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    payment_from: u64,
    #[serde(default)]
    payment_to: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    objects: Vec<Vacancy>,
    total: u64,
    more: bool,
}

#[async_trait]
pub trait SearchApi {
    async fn search(&self, keyword: &str, town: u32, page: u32) -> Result<SearchPage>;
}

#[derive(Serialize)]
struct SearchParams<'a> {
    catalogues: u32,
    town: u32,
    keyword: &'a str,
    page: u32,
    count: u32,
}

pub struct SjClient {
    http: Client,
    api_key: String,
}

impl SjClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key,
        }
    }
}

#[async_trait]
impl SearchApi for SjClient {
    async fn search(&self, keyword: &str, town: u32, page: u32) -> Result<SearchPage> {
        log::debug!(
            "requesting vacancies from superjob, keyword: {}, page: {}",
            keyword,
            page
        );
        let params = SearchParams {
            catalogues: PROGRAMMER_CATALOGUE_ID,
            town,
            keyword,
            page,
            count: VACANCIES_PER_PAGE,
        };
        let resp = self
            .http
            .get(API_URL)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Error::RequestNotOk {
                url: API_URL.to_owned(),
                status: resp.status(),
            });
        }
        let search_page: SearchPage = resp.json().await?;
        Ok(search_page)
    }
}

// payment_from is the lower bound and payment_to the upper one, as the
// field names say.
fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    if vacancy.payment_from == 0 && vacancy.payment_to == 0 {
        return None;
    }
    salary::estimate(Some(vacancy.payment_from), Some(vacancy.payment_to))
}

/// Page through every search result for one language. SuperJob reports
/// no page count, only a "more results" flag, so the loop runs until
/// that flag drops.
pub async fn collect_language_stats(
    api: &impl SearchApi,
    language: &str,
    town: u32,
    retry: &RetryPolicy,
) -> Result<LanguageStats> {
    let mut acc = SalaryAccumulator::default();
    let mut page = 0;
    let found = loop {
        let search_page = fetch_with_retry(|| api.search(language, town, page), retry).await?;
        for vacancy in &search_page.objects {
            if let Some(estimate) = predict_rub_salary(vacancy) {
                acc.add(estimate);
            }
        }
        page += 1;
        if !search_page.more {
            break search_page.total;
        }
    };
    Ok(acc.finalize(found))
}

/// Run the fetch for each language in order, logging and dropping
/// languages whose pages keep failing.
pub async fn collect_report(
    api: &impl SearchApi,
    languages: &[&str],
    town: u32,
    retry: &RetryPolicy,
) -> JobsReport {
    let mut report = JobsReport::default();
    for language in languages {
        match collect_language_stats(api, language, town, retry).await {
            Ok(stats) => {
                log::info!(
                    "superjob {}: found {}, processed {}",
                    language,
                    stats.vacancies_found,
                    stats.vacancies_processed
                );
                report.push(*language, stats);
            }
            Err(err) => log::error!("skipping superjob stats for {}: {}", language, err),
        }
    }
    report
}
