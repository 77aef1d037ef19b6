//! Raw API calls.

use anyhow::{bail, Context as _, Result};
use hackbee_data::{Method, RequestOptions};

use super::FetchArgs;
use crate::context::Context;

/// Run the fetch command.
pub async fn run(args: FetchArgs, ctx: &Context) -> Result<()> {
    let options = build_options(&args)?;
    let client = ctx.client();

    ctx.output.debug(&format!(
        "{} {}{}",
        options.method.as_str(),
        client.base_url(),
        args.endpoint
    ));

    let spinner = ctx.output.spinner(&format!("Fetching {}", args.endpoint));
    let value: Option<serde_json::Value> = client.fetch(&args.endpoint, options).await;
    spinner.finish_and_clear();

    match value {
        Some(value) => {
            ctx.output.json(&value);
            Ok(())
        }
        None => bail!("Request to {} failed", args.endpoint),
    }
}

fn build_options(args: &FetchArgs) -> Result<RequestOptions> {
    let method: Method = args
        .method
        .parse()
        .with_context(|| format!("Invalid method: {}", args.method))?;

    let mut options = RequestOptions::new().method(method);
    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        options = options.header(name, value);
    }
    if let Some(ref data) = args.data {
        options = options.text(data.clone());
    }
    Ok(options)
}

/// Split a `Name: value` header argument.
fn parse_header(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("Header must look like 'Name: value', got '{}'", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Header name is empty in '{}'", raw);
    }
    Ok((name.to_string(), value.trim().to_string()))
}
