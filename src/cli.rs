use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bicdir")]
#[command(version)]
#[command(about = "Fetch and parse Bank of Russia BIC directory archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  bicdir 20260801ED01OSBR.zip              extract accounts from a local archive\n  \
  bicdir --json archive.zip > accounts.json  emit a JSON array\n  \
  bicdir https://www.cbr.ru/VFS/mcirabis/BIKNew/20260801ED01OSBR.zip")]
pub struct Cli {
    /// Archive path or HTTP(S) URL
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Print accounts as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Suppress the summary line
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn is_http_url(&self) -> bool {
        self.locator.starts_with("http://") || self.locator.starts_with("https://")
    }
}
