//! Request dispatch and tool implementations

use serde_json::{json, Value as JsonValue};
use converto::{
    Category, ConversionRequest, Converter, ConvertoError, Number, Renderer, UnitCatalog, CATALOG,
};

use crate::config::ServerConfig;
use crate::protocol::{McpError, McpRequest, McpResponse};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "converto";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stateless handler: every request is answered from the static catalog
pub struct Server {
    catalog: &'static UnitCatalog,
    converter: Converter<'static>,
    renderer: Renderer,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Server {
            catalog: &CATALOG,
            converter: Converter::new(&CATALOG),
            renderer: Renderer::new(config.decimals),
        }
    }

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        tracing::debug!(method = %request.method, "handling request");

        let result = match request.method.as_str() {
            "initialize" => handle_initialize(&request.params),
            "initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            "tools/list" => handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError::method_not_found(&request.method)),
        };

        McpResponse::new(request.id.clone(), result)
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        match name {
            "list_categories" => self.tool_list_categories(),
            "list_units" => self.tool_list_units(&args),
            "convert" => self.tool_convert(&args),
            "catalog" => self.tool_catalog(&args),
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_list_categories(&self) -> Result<JsonValue, McpError> {
        let names = Category::names();
        Ok(json!({
            "content": [{ "type": "text", "text": names.join("\n") }],
            "categories": names
        }))
    }

    fn tool_list_units(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = category_arg("list_units", args)?;
        let units = self.catalog.units_for(category);
        Ok(json!({
            "content": [{ "type": "text", "text": units.join("\n") }],
            "category": category,
            "units": units
        }))
    }

    fn tool_convert(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = category_arg("convert", args)?;
        let value = value_arg("convert", args)?;
        let from_unit = str_arg("convert", args, "from_unit")?;
        let to_unit = str_arg("convert", args, "to_unit")?;

        let request = ConversionRequest::new(category, value, from_unit, to_unit);
        let outcome = self.converter.convert_request(&request);
        let text = self.renderer.outcome(&request, &outcome);

        match outcome {
            Ok(result) => Ok(json!({
                "content": [{ "type": "text", "text": text }],
                "request": request,
                "result": result.to_string(),
                "formatted": self.renderer.result(&result),
                "isError": false
            })),
            Err(e) => {
                tracing::warn!(
                    category = %request.category,
                    from_unit = %request.from_unit,
                    to_unit = %request.to_unit,
                    error = %e,
                    "conversion failed"
                );
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "request": request,
                    "error": ConvertoError::from(e),
                    "isError": true
                }))
            }
        }
    }

    fn tool_catalog(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let entries: serde_json::Map<String, JsonValue> = self.catalog.entries()
            .into_iter()
            .map(|(name, token)| (name.to_string(), json!(token)))
            .collect();

        if args.get("category").is_none() {
            return Ok(json!({
                "content": [{ "type": "text", "text": format!("{} tabulated units", entries.len()) }],
                "entries": entries
            }));
        }

        let category = category_arg("catalog", args)?;
        let units: Vec<JsonValue> = self.catalog.units_for(category)
            .iter()
            .map(|name| json!({
                "name": name,
                "token": self.catalog.resolve(name),
                "tabulated": self.catalog.contains(name)
            }))
            .collect();

        let text = units.iter()
            .map(|u| format!("{} -> {}", u["name"].as_str().unwrap_or_default(), u["token"].as_str().unwrap_or_default()))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "category": category,
            "units": units,
            "entries": entries
        }))
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    tracing::info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion calculator"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Pick a category with 'list_categories', its units with 'list_units', then call 'convert'. Show the returned text to the user as is."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List the measurement categories, in display order.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_units",
                "description": "List the units offered for a category, in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name, e.g. \"Length\" or \"Fuel Economy\"",
                            "enum": Category::names()
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value between two units of a category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name",
                            "enum": Category::names()
                        },
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert, as a number or a decimal string"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Unit of the value, e.g. \"meters\""
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit, e.g. \"kilometers\""
                        }
                    },
                    "required": ["category", "value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "catalog",
                "description": "Show how unit names map to engine tokens, optionally for one category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name. Omit for the whole table."
                        }
                    }
                }
            }
        ]
    }))
}

fn str_arg<'a>(tool: &str, args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(ConvertoError::missing_argument(tool, name).into()),
        Some(v) => v.as_str().ok_or_else(|| ConvertoError::arg_type(tool, name, "a string").into()),
    }
}

fn category_arg(tool: &str, args: &JsonValue) -> Result<Category, McpError> {
    let name = str_arg(tool, args, "category")?;
    name.parse::<Category>()
        .map_err(|_| ConvertoError::unknown_category(name, &Category::names()).into())
}

/// Numbers keep their JSON text so that 0.1 stays exactly 0.1
fn value_arg(tool: &str, args: &JsonValue) -> Result<Number, McpError> {
    let raw = match args.get("value") {
        None | Some(JsonValue::Null) => return Err(ConvertoError::missing_argument(tool, "value").into()),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::String(s)) => s.trim().to_string(),
        Some(_) => return Err(ConvertoError::arg_type(tool, "value", "a number or a numeric string").into()),
    };

    Number::from_str(&raw).map_err(|e| {
        tracing::warn!(value = %raw, "unparseable value");
        ConvertoError::from(e).into()
    })
}
