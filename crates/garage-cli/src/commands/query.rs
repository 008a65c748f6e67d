//! Query command
//!
//! Runs a single document in-process. Every invocation starts from the
//! seed catalog, so mutations do not carry over between runs.

use async_graphql::{Request, Variables};
use clap::Args;

use crate::output::{format_output, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct QueryArgs {
    /// Query or mutation document
    pub document: String,

    /// Variables as a JSON object
    #[arg(long)]
    pub variables: Option<String>,

    /// Operation to run when the document defines several
    #[arg(long)]
    pub operation: Option<String>,
}

pub async fn run(args: &QueryArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let mut request = Request::new(args.document.as_str());

    if let Some(ref variables) = args.variables {
        let variables: serde_json::Value = serde_json::from_str(variables)
            .map_err(|e| anyhow::anyhow!("Invalid --variables JSON: {}", e))?;
        request = request.variables(Variables::from_json(variables));
    }

    if let Some(ref operation) = args.operation {
        request = request.operation_name(operation.as_str());
    }

    let response = ctx.schema().execute(request).await;
    println!("{}", format_output(&response, OutputFormat::from(cli.format.as_str())));

    if !response.errors.is_empty() {
        anyhow::bail!("Query returned {} error(s)", response.errors.len());
    }
    Ok(())
}
