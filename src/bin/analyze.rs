// src/bin/analyze.rs
use accessible_cms::models::{
    AccessibilityProfile, DisabilityType, ProfileSource, UiModificationResponse,
};
use accessible_cms::services::save_analysis_report;
use anyhow::{anyhow, bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde_json::json;
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Single(DisabilityType),
    All,
    Compare,
}

impl Mode {
    fn from_args(args: &[String]) -> Result<Self> {
        match args.first().map(String::as_str) {
            None | Some("all") => Ok(Mode::All),
            Some("compare") => Ok(Mode::Compare),
            Some("single") => {
                let value = args
                    .get(1)
                    .ok_or_else(|| anyhow!("usage: analyze single <disability_type>"))?;
                let dt = value.parse::<DisabilityType>().map_err(|e| anyhow!(e))?;
                Ok(Mode::Single(dt))
            }
            Some(other) => bail!("Unknown mode '{}'. Use: single <type> | all | compare", other),
        }
    }
}

#[derive(Debug)]
struct AnalysisResult {
    disability_type: DisabilityType,
    profile: Option<AccessibilityProfile>,
    duration_secs: f64,
}

struct AnalyzerRunner {
    base_url: String,
    reports_dir: PathBuf,
    client: Client,
    results: Vec<AnalysisResult>,
}

impl AnalyzerRunner {
    fn new(base_url: String, reports_dir: PathBuf) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            reports_dir,
            client,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn analyze(&self, dt: DisabilityType) -> Result<UiModificationResponse> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&json!({ "disability_type": dt.as_str() }))
            .send()
            .await
            .context("Request to /analyze failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            bail!("HTTP {} - {}", status, body);
        }

        response
            .json::<UiModificationResponse>()
            .await
            .context("Failed to parse analysis response")
    }

    async fn run(&mut self, mode: Mode) -> Result<()> {
        println!("\n{}🔍 Checking analyzer status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}❌ Service unavailable at {}.{}", RED, self.base_url, RESET);
            println!("{}Please ensure accessible-cms is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}✅ Service available{}\n", GREEN, RESET);

        let types = match mode {
            Mode::Single(dt) => vec![dt],
            Mode::All | Mode::Compare => DisabilityType::all().to_vec(),
        };

        self.print_header(types.len());

        for (i, dt) in types.iter().enumerate() {
            let start_time = Instant::now();
            println!(
                "{}[{}/{}] Analyzing {}...{}",
                CYAN,
                i + 1,
                types.len(),
                dt.display_name(),
                RESET
            );

            let response = self.analyze(*dt).await;
            let duration = start_time.elapsed().as_secs_f64();

            match response {
                Ok(resp) => {
                    if mode != Mode::Compare {
                        print_profile(&resp.profile);
                    }
                    match save_analysis_report(&resp.profile, &self.reports_dir) {
                        Ok(saved) => println!(
                            "{}💾 Saved {} and {}{}",
                            BLUE,
                            saved.json_path.display(),
                            saved.css_path.display(),
                            RESET
                        ),
                        Err(e) => println!("{}⚠️  Could not save report: {}{}", YELLOW, e, RESET),
                    }
                    self.results.push(AnalysisResult {
                        disability_type: *dt,
                        profile: Some(resp.profile),
                        duration_secs: duration,
                    });
                }
                Err(e) => {
                    println!("{}❌ Error analyzing {}: {:#}{}", RED, dt.display_name(), e, RESET);
                    self.results.push(AnalysisResult {
                        disability_type: *dt,
                        profile: None,
                        duration_secs: duration,
                    });
                }
            }
        }

        if mode == Mode::Compare {
            self.print_comparison();
        } else {
            self.print_summary();
        }
        Ok(())
    }

    fn print_header(&self, total_count: usize) {
        println!("{}╔══════════════════════════════════════════════════════════════╗{}", CYAN, RESET);
        println!("{}║   ♿ UI Accessibility Analyzer                                ║{}", CYAN, RESET);
        println!("{}╚══════════════════════════════════════════════════════════════╝{}", CYAN, RESET);
        println!("\n{}📊 Disability types to analyze: {}{}", BOLD, total_count, RESET);
    }

    fn print_summary(&self) {
        let succeeded = self.results.iter().filter(|r| r.profile.is_some()).count();
        let total_duration: f64 = self.results.iter().map(|r| r.duration_secs).sum();

        println!("\n{}📋 Analysis Summary{}", BOLD, RESET);
        println!("  • Profiles generated: {}{}/{}{}", GREEN, succeeded, self.results.len(), RESET);
        println!("  • Reports directory: {}", self.reports_dir.display());
        println!("  • Total Duration: {:.1}s", total_duration);
    }

    fn print_comparison(&self) {
        println!("\n\n{}📋 Comparison{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────────────────────");
        println!(
            "{:<28} {:<10} {:>8} {:>11} {:>7} {:>8}",
            "Type", "Source", "Changes", "Typography", "Color", "Layout"
        );
        println!("──────────────────────────────────────────────────────────────────────────────");

        for res in &self.results {
            match &res.profile {
                Some(profile) => {
                    let counts = profile.change_counts();
                    let source = match profile.source {
                        ProfileSource::Model => "model",
                        ProfileSource::Fallback => "fallback",
                    };
                    println!(
                        "{:<28} {:<10} {:>8} {:>11} {:>7} {:>8}",
                        res.disability_type.display_name(),
                        source,
                        profile.modifications.len(),
                        counts.typography,
                        counts.color,
                        counts.layout
                    );
                }
                None => println!(
                    "{:<28} {}{:<10}{}",
                    res.disability_type.display_name(),
                    RED,
                    "failed",
                    RESET
                ),
            }
        }
        println!("──────────────────────────────────────────────────────────────────────────────");
    }
}

fn print_profile(profile: &AccessibilityProfile) {
    println!("{}📝 {}{}", MAGENTA, profile.summary, RESET);

    let high = profile.high_priority();
    if !high.is_empty() {
        println!("{}🔥 High-priority changes:{}", BOLD, RESET);
        for m in high {
            println!(
                "  • [{}] {}.{} {}: {} → {}",
                m.priority,
                m.element.component_name,
                m.element.element_type,
                m.element.css_property,
                m.element.current_value,
                m.new_value
            );
        }
    }

    let counts = profile.change_counts();
    println!(
        "  Typography: {}  Color: {}  Layout: {}",
        counts.typography, counts.color, counts.layout
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let mode = Mode::from_args(&args)?;

    let base_url = env::var("ANALYZER_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let reports_dir = env::var("REPORTS_DIR").unwrap_or_else(|_| "accessibility_reports".to_string());

    let mut runner = AnalyzerRunner::new(base_url, PathBuf::from(reports_dir))?;
    runner.run(mode).await
}
