//! Converto MCP Server
//!
//! Line-delimited JSON-RPC over stdio. stdout carries protocol messages
//! only; logs go to stderr.
//!
//! Tools:
//! - list_categories: Measurement categories, in display order
//! - list_units: Units offered for a category
//! - convert: Convert a value between two units of a category
//! - catalog: Friendly unit names and their engine tokens
//!
//! Environment:
//! - RUST_LOG: log filter (default "info")
//! - CONVERTO_DECIMALS: decimal places in results (default 3)

mod config;
mod protocol;
mod server;

use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use protocol::{McpError, McpRequest, McpResponse};
use server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let server = Server::new(config);

    tracing::info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Converto MCP server started");
    tracing::info!(decimals = config.decimals, "configuration loaded");

    let stdin = io::stdin();
    let reader = io::BufReader::new(stdin.lock());

    if let Err(e) = serve(&server, reader, io::stdout()) {
        tracing::error!(error = %e, "I/O failure, stopping");
    }

    tracing::info!("server shutting down");
}

/// Answer requests line by line until EOF
fn serve<R: BufRead, W: Write>(server: &Server, mut reader: R, mut writer: W) -> io::Result<()> {
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            tracing::info!("client disconnected (EOF)");
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!(bytes = line.len(), "received");

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "malformed request");
                write_response(&mut writer, &McpResponse::new(None, Err(McpError::parse_error(e))))?;
                continue;
            }
        };

        let response = server.handle_request(&request);

        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification processed (no response)");
            continue;
        }

        write_response(&mut writer, &response)?;
        tracing::debug!(method = %request.method, "sent response");
    }
}

fn write_response<W: Write>(writer: &mut W, response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response).map_err(io::Error::other)?;
    writeln!(writer, "{}", json)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    fn run(input: &str) -> Vec<JsonValue> {
        let server = Server::new(ServerConfig::default());
        let mut output = Vec::new();
        serve(&server, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#, "\n",
            r#"{"jsonrpc":"2.0","method":"initialized"}"#, "\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"convert","arguments":{"category":"Digital Storage","value":1,"from_unit":"gigabytes","to_unit":"megabytes"}}}"#, "\n",
        );
        let responses = run(input);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"]["content"][0]["text"], "1.0 gigabytes = 1000.000 megabytes");
    }

    #[test]
    fn test_malformed_line_gets_parse_error() {
        let responses = run("{not json}\n{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\n");
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["result"], serde_json::json!({}));
    }

    #[test]
    fn test_failed_conversion_does_not_end_session() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"convert","arguments":{"category":"Length","value":1,"from_unit":"meters","to_unit":"furlongs"}}}"#, "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"convert","arguments":{"category":"Length","value":"2.5","from_unit":"feet","to_unit":"inches"}}}"#, "\n",
        );
        let responses = run(input);
        assert_eq!(responses[0]["result"]["isError"], true);
        assert_eq!(responses[0]["result"]["content"][0]["text"], "Conversion error: unknown unit: furlongs");
        assert_eq!(responses[1]["result"]["content"][0]["text"], "2.5 feet = 30.000 inches");
    }

    #[test]
    fn test_extreme_exponents_do_not_end_session() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"convert","arguments":{"category":"Length","value":"0.1e-9223372036854775808","from_unit":"meters","to_unit":"feet"}}}"#, "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"convert","arguments":{"category":"Area","value":1,"from_unit":"m2^2000000000","to_unit":"acres"}}}"#, "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"convert","arguments":{"category":"Length","value":1,"from_unit":"m^3000000","to_unit":"feet"}}}"#, "\n",
            r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#, "\n",
        );
        let responses = run(input);
        assert_eq!(responses.len(), 4);
        assert!(responses[0]["error"].is_object());
        assert_eq!(responses[1]["result"]["isError"], true);
        assert_eq!(responses[2]["result"]["isError"], true);
        assert_eq!(responses[3]["id"], 4);
        assert_eq!(responses[3]["result"], serde_json::json!({}));
    }
}
