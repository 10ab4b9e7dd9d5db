use chrono::{Duration, Utc};
use dotenv::dotenv;
use job_stats::report::render_table;
use job_stats::{hh, superjob, RetryPolicy};

const LANGUAGES: [&str; 12] = [
    "JavaScript",
    "Python",
    "TypeScript",
    "Java",
    "C#",
    "C++",
    "C",
    "PHP",
    "Go",
    "Rust",
    "Kotlin",
    "Swift",
];

const HH_MOSCOW_AREA_ID: u32 = 1;
const SJ_MOSCOW_TOWN_ID: u32 = 4;
const SEARCH_WINDOW_DAYS: i64 = 30;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    // Resolve the SuperJob key before any network traffic so a missing
    // secret fails at startup, not halfway through the HeadHunter run.
    let sj_config = match superjob::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let retry = RetryPolicy::default();
    let date_from = Utc::now().date_naive() - Duration::days(SEARCH_WINDOW_DAYS);

    let hh_client = hh::HhClient::new();
    let hh_report =
        hh::collect_report(&hh_client, &LANGUAGES, HH_MOSCOW_AREA_ID, date_from, &retry).await;
    println!("{}", render_table(&hh_report, "HeadHunter Moscow"));
    println!();

    let sj_client = superjob::SjClient::new(sj_config);
    let sj_report =
        superjob::collect_report(&sj_client, &LANGUAGES, SJ_MOSCOW_TOWN_ID, &retry).await;
    println!("{}", render_table(&sj_report, "SuperJob Moscow"));
}
