use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fetch::{fetch_with_retry, RetryPolicy};
use crate::salary;
use crate::stats::{JobsReport, LanguageStats, SalaryAccumulator};

const API_URL: &str = "https://api.hh.ru/vacancies";

/// hh.ru reports rubles as "RUR"; anything else is skipped rather than
/// converted.
const RUB_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<u64>,
    to: Option<u64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    items: Vec<Vacancy>,
    pages: u32,
    found: u64,
}

#[async_trait]
pub trait SearchApi {
    async fn search(
        &self,
        text: &str,
        area: u32,
        date_from: NaiveDate,
        page: u32,
    ) -> Result<SearchPage>;
}

#[derive(Serialize)]
struct SearchParams<'a> {
    text: &'a str,
    area: u32,
    date_from: NaiveDate,
    page: u32,
}

pub struct HhClient {
    http: Client,
}

impl HhClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HhClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchApi for HhClient {
    async fn search(
        &self,
        text: &str,
        area: u32,
        date_from: NaiveDate,
        page: u32,
    ) -> Result<SearchPage> {
        log::debug!("requesting vacancies from hh, search: {}, page: {}", text, page);
        let params = SearchParams {
            text,
            area,
            date_from,
            page,
        };
        let resp = self.http.get(API_URL).query(&params).send().await?;
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

fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    if salary.currency.as_deref() != Some(RUB_CURRENCY) {
        return None;
    }
    salary::estimate(salary.from, salary.to)
}

/// Page through every search result for one language, accumulating
/// salary estimates. The server may revise its page count between
/// requests, so the total is re-read from each response.
pub async fn collect_language_stats(
    api: &impl SearchApi,
    language: &str,
    area: u32,
    date_from: NaiveDate,
    retry: &RetryPolicy,
) -> Result<LanguageStats> {
    let text = format!("Программист {}", language);
    let mut acc = SalaryAccumulator::default();
    let mut found = 0;
    let mut page = 0;
    let mut pages = 1;
    while page < pages {
        let search_page =
            fetch_with_retry(|| api.search(&text, area, date_from, page), retry).await?;
        pages = search_page.pages;
        found = search_page.found;
        for vacancy in &search_page.items {
            if let Some(estimate) = predict_rub_salary(vacancy) {
                acc.add(estimate);
            }
        }
        page += 1;
    }
    Ok(acc.finalize(found))
}

/// Run the fetch for each language in order. A language whose pages
/// keep failing is logged and left out of the report; the remaining
/// languages still go through.
pub async fn collect_report(
    api: &impl SearchApi,
    languages: &[&str],
    area: u32,
    date_from: NaiveDate,
    retry: &RetryPolicy,
) -> JobsReport {
    let mut report = JobsReport::default();
    for language in languages {
        match collect_language_stats(api, language, area, date_from, retry).await {
            Ok(stats) => {
                log::info!(
                    "hh {}: found {}, processed {}",
                    language,
                    stats.vacancies_found,
                    stats.vacancies_processed
                );
                report.push(*language, stats);
            }
            Err(err) => log::error!("skipping hh stats for {}: {}", language, err),
        }
    }
    report
}
