// Hey Bible tools: read-only access to verses, notes, and AI-generated images

use crate::tools::{json_schema_number, json_schema_object, Tool};
use heybible_client::{
    BibleApi, GetParams, HeyBibleError, HeyBibleResult, Resource, LIMIT_MAX, LIMIT_MIN,
};
use rmcp::model::{CallToolResult, Content, ErrorData, JsonObject, Tool as ToolSchema};
use serde_json::Value;
use std::sync::Arc;

/// Input schema shared by all three tools: optional id, bounded limit,
/// non-negative offset.
fn fetch_input_schema(id_description: &str, plural: &str) -> JsonObject {
    json_schema_object(
        serde_json::json!({
            "id": json_schema_number(id_description),
            "limit": {
                "type": "number",
                "minimum": LIMIT_MIN,
                "maximum": LIMIT_MAX,
                "description": format!(
                    "Number of {} to return ({}-{}). Ignored if id is specified.",
                    plural, LIMIT_MIN, LIMIT_MAX
                )
            },
            "offset": {
                "type": "number",
                "minimum": 0,
                "description": format!(
                    "Number of {} to skip for pagination. Ignored if id is specified.",
                    plural
                )
            }
        }),
        vec![],
    )
}

/// Parse and bounds-check tool arguments.
///
/// Fails with a protocol-level invalid-params error before any remote call
/// is made. The id/limit/offset interplay is not checked here: the API
/// ignores pagination fields when id is set, and all three are forwarded
/// as given.
fn parse_params(arguments: JsonObject) -> Result<GetParams, ErrorData> {
    let params: GetParams = serde_json::from_value(Value::Object(arguments))
        .map_err(|err| ErrorData::invalid_params(format!("Invalid arguments: {}", err), None))?;

    if let Some(limit) = params.limit {
        if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
            return Err(ErrorData::invalid_params(
                format!("limit must be between {} and {}", LIMIT_MIN, LIMIT_MAX),
                None,
            ));
        }
    }

    Ok(params)
}

/// Convert a remote outcome into a tool result.
///
/// Success is the pretty-printed raw response; failure is an error-flagged
/// text block carrying the error's message. Remote failures never become
/// protocol errors, so the server keeps serving.
fn fetch_result(resource: Resource, outcome: HeyBibleResult<Value>) -> CallToolResult {
    match outcome
        .and_then(|value| serde_json::to_string_pretty(&value).map_err(|_| HeyBibleError::Unknown))
    {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => CallToolResult::error(vec![Content::text(format!(
            "Error fetching {}: {}",
            resource, err
        ))]),
    }
}

/// Tool to fetch saved Bible verses
pub struct GetVersesTool {
    api: Arc<dyn BibleApi>,
}

impl GetVersesTool {
    pub fn new(api: Arc<dyn BibleApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetVersesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "get_verses",
            "Get saved Bible verses from Hey Bible. Returns verses with their book, chapter, \
             verse numbers, content, and any associated notes and images.",
            Arc::new(fetch_input_schema(
                "Specific verse ID to retrieve. If provided, returns only that verse.",
                "verses",
            )),
        )
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, ErrorData> {
        let params = parse_params(arguments)?;
        Ok(fetch_result(
            Resource::Verses,
            self.api.verses_get(&params).await,
        ))
    }
}

/// Tool to fetch notes attached to verses
pub struct GetNotesTool {
    api: Arc<dyn BibleApi>,
}

impl GetNotesTool {
    pub fn new(api: Arc<dyn BibleApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetNotesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "get_notes",
            "Get notes from Hey Bible. Notes are user-created annotations associated with \
             Bible verses.",
            Arc::new(fetch_input_schema(
                "Specific note ID to retrieve. If provided, returns only that note.",
                "notes",
            )),
        )
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, ErrorData> {
        let params = parse_params(arguments)?;
        Ok(fetch_result(
            Resource::Notes,
            self.api.notes_get(&params).await,
        ))
    }
}

/// Tool to fetch AI-generated images
pub struct GetImagesTool {
    api: Arc<dyn BibleApi>,
}

impl GetImagesTool {
    pub fn new(api: Arc<dyn BibleApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetImagesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "get_images",
            "Get AI-generated images from Hey Bible. Images are associated with Bible verses. \
             When fetching a specific image by ID, a signed URL is returned for accessing the \
             image.",
            Arc::new(fetch_input_schema(
                "Specific image ID to retrieve. If provided, returns that image with a signed \
                 URL (24 hour expiry).",
                "images",
            )),
        )
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, ErrorData> {
        let params = parse_params(arguments)?;
        Ok(fetch_result(
            Resource::Images,
            self.api.images_get(&params).await,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use std::sync::Mutex;

    /// Recording stand-in for the remote API. Replies once with the
    /// configured outcome and remembers every call it receives.
    struct MockApi {
        reply: Mutex<Option<HeyBibleResult<Value>>>,
        calls: Mutex<Vec<(Resource, GetParams)>>,
    }

    impl MockApi {
        fn replying(reply: HeyBibleResult<Value>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(Resource, GetParams)> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, resource: Resource, params: &GetParams) -> HeyBibleResult<Value> {
            self.calls.lock().unwrap().push((resource, *params));
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(Value::Null))
        }
    }

    #[async_trait::async_trait]
    impl BibleApi for MockApi {
        async fn verses_get(&self, params: &GetParams) -> HeyBibleResult<Value> {
            self.record(Resource::Verses, params)
        }

        async fn notes_get(&self, params: &GetParams) -> HeyBibleResult<Value> {
            self.record(Resource::Notes, params)
        }

        async fn images_get(&self, params: &GetParams) -> HeyBibleResult<Value> {
            self.record(Resource::Images, params)
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_verses_success_pretty_prints_response() {
        let payload = serde_json::json!({
            "verses": [{"id": 1, "book": "John", "chapter": 3, "verse": 16, "content": "For God so loved the world..."}]
        });
        let api = MockApi::replying(Ok(payload.clone()));
        let tool = GetVersesTool::new(api.clone());

        let result = tool.execute(JsonObject::new()).await.unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&payload).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_notes_success_pretty_prints_response() {
        let payload = serde_json::json!([{"id": 9, "content": "reflect on this"}]);
        let api = MockApi::replying(Ok(payload.clone()));
        let tool = GetNotesTool::new(api.clone());

        let result = tool.execute(JsonObject::new()).await.unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&payload).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_images_success_relays_signed_url() {
        let payload = serde_json::json!({
            "id": 7,
            "signed_url": "https://cdn.heybible.com/images/7?sig=abc"
        });
        let api = MockApi::replying(Ok(payload.clone()));
        let tool = GetImagesTool::new(api.clone());

        let result = tool
            .execute(args(serde_json::json!({"id": 7})))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&payload).unwrap()
        );
        assert_eq!(api.calls(), vec![(Resource::Images, GetParams {
            id: Some(7),
            ..Default::default()
        })]);
    }

    #[tokio::test]
    async fn test_get_verses_error_carries_message() {
        let api = MockApi::replying(Err(HeyBibleError::Api {
            status: 500,
            message: "service unavailable".to_string(),
        }));
        let tool = GetVersesTool::new(api.clone());

        let result = tool.execute(JsonObject::new()).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error fetching verses: service unavailable"
        );
    }

    #[tokio::test]
    async fn test_get_notes_error_carries_message() {
        let api = MockApi::replying(Err(HeyBibleError::Api {
            status: 403,
            message: "invalid api key".to_string(),
        }));
        let tool = GetNotesTool::new(api.clone());

        let result = tool.execute(JsonObject::new()).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error fetching notes: invalid api key");
    }

    #[tokio::test]
    async fn test_get_images_error_carries_message() {
        let api = MockApi::replying(Err(HeyBibleError::Api {
            status: 404,
            message: "image not found".to_string(),
        }));
        let tool = GetImagesTool::new(api.clone());

        let result = tool.execute(JsonObject::new()).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error fetching images: image not found");
    }

    #[tokio::test]
    async fn test_messageless_failure_reports_unknown_error() {
        let api = MockApi::replying(Err(HeyBibleError::Unknown));
        let tool = GetVersesTool::new(api.clone());

        let result = tool.execute(JsonObject::new()).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error fetching verses: Unknown error");
    }

    #[tokio::test]
    async fn test_limit_out_of_range_rejected_before_remote_call() {
        let api = MockApi::replying(Ok(Value::Null));
        let tool = GetVersesTool::new(api.clone());

        let result = tool.execute(args(serde_json::json!({"limit": 150}))).await;

        assert!(result.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_limit_zero_rejected_before_remote_call() {
        let api = MockApi::replying(Ok(Value::Null));
        let tool = GetNotesTool::new(api.clone());

        let result = tool.execute(args(serde_json::json!({"limit": 0}))).await;

        assert!(result.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_typed_arguments_rejected_before_remote_call() {
        let api = MockApi::replying(Ok(Value::Null));
        let tool = GetImagesTool::new(api.clone());

        let result = tool
            .execute(args(serde_json::json!({"limit": "ten"})))
            .await;

        assert!(result.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_id_with_pagination_fields_passes_all_through() {
        let api = MockApi::replying(Ok(Value::Null));
        let tool = GetVersesTool::new(api.clone());

        tool.execute(args(serde_json::json!({"id": 42, "limit": 10, "offset": 5})))
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec![(
                Resource::Verses,
                GetParams {
                    id: Some(42),
                    limit: Some(10),
                    offset: Some(5),
                }
            )]
        );
    }

    #[test]
    fn test_schemas_declare_names_and_limit_bounds() {
        let api = MockApi::replying(Ok(Value::Null));

        let verses = GetVersesTool::new(api.clone()).schema();
        let notes = GetNotesTool::new(api.clone()).schema();
        let images = GetImagesTool::new(api).schema();

        assert_eq!(verses.name, "get_verses");
        assert_eq!(notes.name, "get_notes");
        assert_eq!(images.name, "get_images");

        for schema in [&verses, &notes, &images] {
            let limit = &schema.input_schema["properties"]["limit"];
            assert_eq!(limit["minimum"], 1);
            assert_eq!(limit["maximum"], 100);
            assert_eq!(schema.input_schema["properties"]["offset"]["minimum"], 0);
        }
    }
}
