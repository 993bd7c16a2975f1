use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use records::filter::{self, RecordFilter, SortOrder, StatusFilter};
use records::{ArticleRecord, CurationStatus, SearchParams, SortOption};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; pass --token or set CURATION_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned error for {endpoint}: {message}")]
    ServerError { endpoint: String, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("cannot read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error(
        "unknown status `{0}`; expected manual_approved, unavailable, approved_ai, rejected_ai or pending"
    )]
    InvalidStatus(String),
    #[error("unknown sort option `{0}`; expected relevance, newest or cited")]
    InvalidSort(String),
    #[error("row {0} not found in the curation list")]
    RowNotFound(i64),
    #[error("row {0} has no local document to approve; pass --file-name explicitly")]
    NoLocalDocument(i64),
    #[error("refusing to run a destructive command without --yes")]
    ConfirmationRequired,
}

#[derive(Parser, Debug)]
#[command(name = "curation-cli", about = "Scientometric curation API CLI")]
struct Cli {
    #[arg(long, env = "CURATION_BASE_URL", default_value = "http://localhost:5001/api")]
    base_url: String,

    /// Bearer token for authenticated endpoints (see `login`).
    #[arg(long, env = "CURATION_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token and print it.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Probe the backend health endpoint.
    Health,
    /// Run a database search.
    Search(SearchArgs),
    /// Work with the curation record list.
    Records(RecordsCommand),
    /// Insert one record, optionally with its document file.
    Insert {
        /// Record as a JSON object keyed by column names.
        #[arg(long)]
        data: String,
        /// Document file to attach (switches to a multipart upload).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Server-side batch processing.
    Batch(BatchCommand),
    /// Ask the AI service to extract record metadata.
    Extract {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Account administration.
    Users(UsersCommand),
    /// Register a new account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "cientometria")]
        role: String,
    },
    /// Print the AI service's decision log.
    LlmLogs,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Boolean query expression (AND/OR/NOT and parentheses).
    terms: String,
    #[arg(long)]
    start_year: Option<i32>,
    #[arg(long)]
    end_year: Option<i32>,
    #[arg(long, default_value = "relevance")]
    sort: String,
}

#[derive(Args, Debug)]
struct RecordsCommand {
    #[command(subcommand)]
    command: RecordsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RecordsSubcommand {
    /// List curation records with derived statuses.
    List {
        /// Filter by derived status tag.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive substring over title/authors.
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value_t = false)]
        desc: bool,
        /// Zero-based page; omit to list everything.
        #[arg(long)]
        page: Option<usize>,
        #[arg(long, default_value_t = 30)]
        per_page: usize,
        /// Print raw JSON instead of the table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run AI classification for one row.
    Analyze { row: i64 },
    /// Run AI categorization for one row.
    Categorize { row: i64 },
    /// Record a manual approval for one row.
    Approve {
        row: i64,
        /// Local document name; defaults to the row's document column.
        #[arg(long)]
        file_name: Option<String>,
    },
    /// Record a manual rejection for one row.
    Reject { row: i64 },
    /// Delete one row.
    Delete {
        row: i64,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Delete every record without a local document.
    DeleteUnavailable {
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Run AI classification for every pending row (fire-and-forget).
    AnalyzePending,
}

#[derive(Args, Debug)]
struct BatchCommand {
    #[command(subcommand)]
    command: BatchSubcommand,
}

#[derive(Subcommand, Debug)]
enum BatchSubcommand {
    /// Process a folder visible to the backend.
    Folder { path: String },
    /// Upload a ZIP of documents for batch curation.
    Zip { file: PathBuf },
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    Delete {
        id: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Replace an account's role and category restriction.
    Permissions {
        id: String,
        #[arg(long)]
        role: String,
        /// Repeat for each allowed category; none means global access.
        #[arg(long = "category")]
        categories: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        token: cli.token,
    };

    match cli.command {
        Command::Login { username, password } => run_login(&ctx, &username, &password).await,
        Command::Health => run_health(&ctx).await,
        Command::Search(args) => run_search(&ctx, args).await,
        Command::Records(records) => run_records(&ctx, records.command).await,
        Command::Insert { data, file } => run_insert(&ctx, &data, file).await,
        Command::Batch(batch) => run_batch(&ctx, batch.command).await,
        Command::Extract { title, file } => run_extract(&ctx, title, file).await,
        Command::Users(users) => run_users(&ctx, users.command).await,
        Command::Register {
            username,
            email,
            password,
            role,
        } => run_register(&ctx, &username, &email, &password, &role).await,
        Command::LlmLogs => {
            let json = api_request(&ctx, reqwest::Method::GET, "/llm-logs", None).await?;
            print_json(&json)
        }
    }
}

async fn run_login(ctx: &CliContext, username: &str, password: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = endpoint_url(&ctx.base_url, "/login");
    let response = client
        .post(url)
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    let json = read_body(response, "/login").await?;

    match json.get("accessToken").and_then(Value::as_str) {
        Some(token) => {
            println!("{token}");
            Ok(())
        }
        None => Err(CliError::ServerError {
            endpoint: "/login".to_owned(),
            message: "response carried no accessToken".to_owned(),
        }),
    }
}

async fn run_health(ctx: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = endpoint_url(&ctx.base_url, "/health");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            endpoint: "/health".to_owned(),
            message: format!("HTTP {}", status.as_u16()),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_search(ctx: &CliContext, args: SearchArgs) -> Result<(), CliError> {
    let sort_option =
        SortOption::parse(&args.sort).ok_or_else(|| CliError::InvalidSort(args.sort.clone()))?;
    let params = SearchParams {
        search_terms: args.terms,
        start_year: args.start_year,
        end_year: args.end_year,
        sort_option,
    };
    let json = api_request(
        ctx,
        reqwest::Method::POST,
        "/search",
        Some(serde_json::to_value(&params)?),
    )
    .await?;
    print_json(&json)
}

async fn run_records(ctx: &CliContext, command: RecordsSubcommand) -> Result<(), CliError> {
    match command {
        RecordsSubcommand::List {
            status,
            category,
            query,
            desc,
            page,
            per_page,
            json,
        } => {
            let status_filter = match status {
                None => StatusFilter::All,
                Some(tag) => CurationStatus::parse(&tag)
                    .map(StatusFilter::Only)
                    .ok_or(CliError::InvalidStatus(tag))?,
            };
            let records = fetch_records(ctx).await?;
            let record_filter = RecordFilter {
                status: status_filter,
                category,
                query: query.unwrap_or_default(),
            };
            let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
            let mut visible = filter::filtered(&records, &record_filter, order);
            if let Some(page) = page {
                visible = filter::paginate(&visible, page, per_page);
            }

            if json {
                return print_json(&serde_json::to_value(&visible)?);
            }

            let summary = filter::summarize(&records);
            for record in &visible {
                let info = CurationStatus::derive(record).info();
                println!(
                    "{:>6}  {:<28}  {}",
                    record
                        .row_number
                        .map_or_else(|| "-".to_owned(), |row| row.to_string()),
                    info.label,
                    record.title.as_deref().unwrap_or("(sem título)"),
                );
            }
            eprintln!(
                "{} shown / {} total — approved={} pending={} rejected={} unavailable={}",
                visible.len(),
                records.len(),
                summary.approved,
                summary.pending,
                summary.rejected,
                summary.unavailable,
            );
            Ok(())
        }
        RecordsSubcommand::Analyze { row } => {
            let json = api_request(
                ctx,
                reqwest::Method::POST,
                "/trigger-curation-single",
                Some(serde_json::json!({ "row_number": row })),
            )
            .await?;
            print_json(&json)
        }
        RecordsSubcommand::Categorize { row } => {
            let json = api_request(
                ctx,
                reqwest::Method::POST,
                "/categorize-single",
                Some(serde_json::json!({ "row_number": row })),
            )
            .await?;
            print_json(&json)
        }
        RecordsSubcommand::Approve { row, file_name } => {
            let file_name = match file_name {
                Some(name) => name,
                None => {
                    // Look the document up from the record itself.
                    let records = fetch_records(ctx).await?;
                    let record = records
                        .iter()
                        .find(|r| r.row_number == Some(row))
                        .ok_or(CliError::RowNotFound(row))?;
                    record
                        .document_url
                        .clone()
                        .filter(|url| !url.trim().is_empty())
                        .ok_or(CliError::NoLocalDocument(row))?
                }
            };
            let json = api_request(
                ctx,
                reqwest::Method::POST,
                "/manual-approval",
                Some(serde_json::json!({ "row_number": row, "fileName": file_name })),
            )
            .await?;
            print_json(&json)
        }
        RecordsSubcommand::Reject { row } => {
            let json = api_request(
                ctx,
                reqwest::Method::POST,
                "/manual-rejection",
                Some(serde_json::json!({ "row_number": row })),
            )
            .await?;
            print_json(&json)
        }
        RecordsSubcommand::Delete { row, yes } => {
            if !yes {
                return Err(CliError::ConfirmationRequired);
            }
            let json = api_request(
                ctx,
                reqwest::Method::POST,
                "/delete-row",
                Some(serde_json::json!({ "row_number": row })),
            )
            .await?;
            print_json(&json)
        }
        RecordsSubcommand::DeleteUnavailable { yes } => {
            if !yes {
                return Err(CliError::ConfirmationRequired);
            }
            let json =
                api_request(ctx, reqwest::Method::POST, "/delete-unavailable", None).await?;
            print_json(&json)
        }
        RecordsSubcommand::AnalyzePending => {
            let json = api_request(ctx, reqwest::Method::POST, "/trigger-curation", None).await?;
            print_json(&json)
        }
    }
}

async fn run_insert(
    ctx: &CliContext,
    data: &str,
    file: Option<PathBuf>,
) -> Result<(), CliError> {
    let record: ArticleRecord = serde_json::from_str(data)?;
    let json = match file {
        None => {
            api_request(
                ctx,
                reqwest::Method::POST,
                "/manual-insert",
                Some(serde_json::to_value(&record)?),
            )
            .await?
        }
        Some(path) => {
            let mut form = reqwest::multipart::Form::new();
            if let Value::Object(map) = serde_json::to_value(&record)? {
                for (key, value) in map {
                    let rendered = match value {
                        Value::String(s) => s,
                        Value::Null => String::new(),
                        other => other.to_string(),
                    };
                    form = form.text(key, rendered);
                }
            }
            form = form.part("file", file_part(&path)?);
            multipart_request(ctx, "/manual-insert", form).await?
        }
    };
    print_json(&json)
}

async fn run_batch(ctx: &CliContext, command: BatchSubcommand) -> Result<(), CliError> {
    match command {
        BatchSubcommand::Folder { path } => {
            let json = api_request(
                ctx,
                reqwest::Method::POST,
                "/batch-process-local-folder",
                Some(serde_json::json!({ "folder_path": path })),
            )
            .await?;
            print_json(&json)
        }
        BatchSubcommand::Zip { file } => {
            let form = reqwest::multipart::Form::new().part("file", file_part(&file)?);
            let json = multipart_request(ctx, "/batch-upload-zip", form).await?;
            print_json(&json)
        }
    }
}

async fn run_extract(
    ctx: &CliContext,
    title: Option<String>,
    file: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut form = reqwest::multipart::Form::new();
    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        form = form.text("title", title);
    }
    if let Some(path) = file {
        form = form.part("file", file_part(&path)?);
    }
    let json = multipart_request(ctx, "/extract-metadata", form).await?;
    print_json(&json)
}

async fn run_users(ctx: &CliContext, command: UsersSubcommand) -> Result<(), CliError> {
    match command {
        UsersSubcommand::List => {
            let json = api_request(ctx, reqwest::Method::GET, "/users", None).await?;
            print_json(&json)
        }
        UsersSubcommand::Delete { id, yes } => {
            if !yes {
                return Err(CliError::ConfirmationRequired);
            }
            let path = format!("/users/{id}");
            let json = api_request(ctx, reqwest::Method::DELETE, &path, None).await?;
            print_json(&json)
        }
        UsersSubcommand::Permissions {
            id,
            role,
            categories,
        } => {
            let path = format!("/users/{id}/permissions");
            let json = api_request(
                ctx,
                reqwest::Method::PUT,
                &path,
                Some(serde_json::json!({
                    "role": role,
                    "allowed_categories": categories,
                })),
            )
            .await?;
            print_json(&json)
        }
    }
}

async fn run_register(
    ctx: &CliContext,
    username: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<(), CliError> {
    let json = api_request(
        ctx,
        reqwest::Method::POST,
        "/register",
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "role": role,
        })),
    )
    .await?;
    print_json(&json)
}

async fn fetch_records(ctx: &CliContext) -> Result<Vec<ArticleRecord>, CliError> {
    let json = api_request(ctx, reqwest::Method::GET, "/curation", None).await?;
    Ok(serde_json::from_value(json)?)
}

fn authed_client(ctx: &CliContext) -> Result<reqwest::Client, CliError> {
    let token = ctx.token.as_deref().ok_or(CliError::MissingToken)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}"))?,
    );

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .build()?)
}

async fn api_request(
    ctx: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let client = authed_client(ctx)?;
    let url = endpoint_url(&ctx.base_url, path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    read_body(request.send().await?, path).await
}

async fn multipart_request(
    ctx: &CliContext,
    path: &str,
    form: reqwest::multipart::Form,
) -> Result<Value, CliError> {
    let client = authed_client(ctx)?;
    let url = endpoint_url(&ctx.base_url, path);
    let response = client.post(&url).multipart(form).send().await?;
    read_body(response, path).await
}

async fn read_body(response: reqwest::Response, path: &str) -> Result<Value, CliError> {
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        let message = value
            .get("error")
            .or_else(|| value.get("detail"))
            .and_then(Value::as_str)
            .map_or_else(|| format!("HTTP {}", status.as_u16()), ToOwned::to_owned);
        return Err(CliError::ServerError {
            endpoint: path.to_owned(),
            message,
        });
    }

    Ok(value)
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn file_part(path: &PathBuf) -> Result<reqwest::multipart::Part, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
    Ok(reqwest::multipart::Part::bytes(bytes).file_name(name))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
