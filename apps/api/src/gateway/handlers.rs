use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::extract::AppQuery;
use crate::state::AppState;

/// GET /api/onet?path=<upstream-path>&<query...>
///
/// Pass-through to the upstream service. Every parameter other than `path` is forwarded
/// as-is; the upstream body comes back verbatim.
pub async fn handle_proxy(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let (path, query) = split_path(params)?;
    let body = state.gateway.fetch(&path, query).await?;
    Ok(Json(body))
}

fn split_path(params: Vec<(String, String)>) -> Result<(String, Vec<(String, String)>), AppError> {
    let mut path = None;
    let mut query = Vec::with_capacity(params.len());
    for (key, value) in params {
        if key == "path" {
            path.get_or_insert(value);
        } else {
            query.push((key, value));
        }
    }
    let path = path
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Path parameter is required".to_string()))?;
    Ok((path, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_keeps_other_params_in_order() {
        let (path, query) = split_path(vec![
            ("start".into(), "1".into()),
            ("path".into(), "mnm/search".into()),
            ("keyword".into(), "nurse".into()),
        ])
        .unwrap();
        assert_eq!(path, "mnm/search");
        assert_eq!(
            query,
            vec![
                ("start".to_string(), "1".to_string()),
                ("keyword".to_string(), "nurse".to_string())
            ]
        );
    }

    #[test]
    fn test_split_path_requires_path() {
        let err = split_path(vec![("start".into(), "1".into())]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = split_path(vec![("path".into(), "".into())]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
