//! JSON query DSL.
//!
//! Translates a tree-shaped JSON description into a scorer tree. Term
//! leaves are resolved by a caller-supplied function, which is where an
//! index plugs in its posting-list retrieval.
//!
//! ```
//! use quiver::{parse_query, Scorer, TermScorer};
//! use serde_json::json;
//!
//! let query_json = json!({"or": [
//!     {"term": {"field": "name", "value": "john"}},
//!     {"term": {"field": "name", "value": "johnny"}},
//! ]});
//! let mut query = parse_query(&query_json, &|_field, value| {
//!     Box::new(TermScorer::new(10, value, vec![1, 2, 3]))
//! })
//! .unwrap();
//! query.for_each(&mut |doc, score| println!("{doc} {score}"));
//! ```

use serde_json::Value;

use crate::query::{
    dis_max_scorers, intersect_scorers, union_scorers, ConstScorer, Exclude, Scorer,
};
use crate::{QuiverError, Score};

/// Resolves a `(field, value)` term leaf into a scorer.
pub type LeafResolver<'a> = dyn Fn(&str, &str) -> Box<dyn Scorer> + 'a;

/// Parses a JSON query description into a scorer tree.
///
/// Every node is an object with exactly one query kind among `term`,
/// `and`, `or`, `and_not`, `dis_max` and `constant`, plus an optional
/// numeric `boost` applied to the node. Unknown kinds are reported as
/// [`QuiverError::InvalidQuery`].
pub fn parse_query(query_json: &Value, leaf: &LeafResolver) -> crate::Result<Box<dyn Scorer>> {
    let obj = match query_json {
        Value::Object(obj) => obj,
        _ => {
            return Err(QuiverError::InvalidQuery(
                "query must be a JSON object".to_string(),
            ))
        }
    };
    let mut boost: Option<Score> = None;
    let mut node: Option<(&str, &Value)> = None;
    for (key, value) in obj {
        if key == "boost" {
            let value = value.as_f64().ok_or_else(|| {
                QuiverError::InvalidQuery("'boost' must be a number".to_string())
            })?;
            boost = Some(value as Score);
        } else if node.is_some() {
            return Err(QuiverError::InvalidQuery(
                "query object should contain exactly one query kind".to_string(),
            ));
        } else {
            node = Some((key, value));
        }
    }
    let (kind, params) = node.ok_or_else(|| {
        QuiverError::InvalidQuery("query object cannot be empty".to_string())
    })?;
    let mut scorer = match kind {
        "term" => parse_term_query(params, leaf)?,
        "and" => intersect_scorers(parse_query_array(params, leaf, "and")?),
        "or" => union_scorers(parse_query_array(params, leaf, "or")?),
        "and_not" => parse_and_not_query(params, leaf)?,
        "dis_max" => parse_dis_max_query(params, leaf)?,
        "constant" => parse_constant_query(params, leaf)?,
        _ => {
            return Err(QuiverError::InvalidQuery(format!(
                "unknown query kind: {kind}"
            )))
        }
    };
    if let Some(boost) = boost {
        scorer.set_boost(boost);
    }
    Ok(scorer)
}

/// `{"term": {"field": ..., "value": ...}}`
fn parse_term_query(params: &Value, leaf: &LeafResolver) -> crate::Result<Box<dyn Scorer>> {
    let obj = params.as_object().ok_or_else(|| {
        QuiverError::InvalidQuery("term query parameters must be an object".to_string())
    })?;
    let field = obj.get("field").and_then(Value::as_str).ok_or_else(|| {
        QuiverError::InvalidQuery("term query requires a string 'field'".to_string())
    })?;
    let value = obj.get("value").and_then(Value::as_str).ok_or_else(|| {
        QuiverError::InvalidQuery("term query requires a string 'value'".to_string())
    })?;
    Ok(leaf(field, value))
}

fn parse_query_array(
    params: &Value,
    leaf: &LeafResolver,
    kind: &str,
) -> crate::Result<Vec<Box<dyn Scorer>>> {
    let children = params.as_array().ok_or_else(|| {
        QuiverError::InvalidQuery(format!("'{kind}' expects an array of queries"))
    })?;
    children
        .iter()
        .map(|child| parse_query(child, leaf))
        .collect()
}

/// `{"and_not": {"positive": ..., "excluded": [...]}}`
fn parse_and_not_query(params: &Value, leaf: &LeafResolver) -> crate::Result<Box<dyn Scorer>> {
    let obj = params.as_object().ok_or_else(|| {
        QuiverError::InvalidQuery("and_not query parameters must be an object".to_string())
    })?;
    let positive = obj.get("positive").ok_or_else(|| {
        QuiverError::InvalidQuery("and_not query requires a 'positive' query".to_string())
    })?;
    let excluded = match obj.get("excluded") {
        Some(excluded) => parse_query_array(excluded, leaf, "excluded")?,
        None => Vec::new(),
    };
    Ok(Box::new(Exclude::new(parse_query(positive, leaf)?, excluded)))
}

/// `{"dis_max": {"tie_breaker": ..., "queries": [...]}}`
fn parse_dis_max_query(params: &Value, leaf: &LeafResolver) -> crate::Result<Box<dyn Scorer>> {
    let obj = params.as_object().ok_or_else(|| {
        QuiverError::InvalidQuery("dis_max query parameters must be an object".to_string())
    })?;
    let tie_breaker = match obj.get("tie_breaker") {
        Some(tie_breaker) => tie_breaker.as_f64().ok_or_else(|| {
            QuiverError::InvalidQuery("'tie_breaker' must be a number".to_string())
        })? as Score,
        None => 0f32,
    };
    let queries = obj.get("queries").ok_or_else(|| {
        QuiverError::InvalidQuery("dis_max query requires a 'queries' array".to_string())
    })?;
    Ok(dis_max_scorers(
        tie_breaker,
        parse_query_array(queries, leaf, "dis_max")?,
    ))
}

/// `{"constant": {"score": ..., "query": ...}}`
fn parse_constant_query(params: &Value, leaf: &LeafResolver) -> crate::Result<Box<dyn Scorer>> {
    let obj = params.as_object().ok_or_else(|| {
        QuiverError::InvalidQuery("constant query parameters must be an object".to_string())
    })?;
    let score = obj
        .get("score")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            QuiverError::InvalidQuery("constant query requires a numeric 'score'".to_string())
        })? as Score;
    let query = obj.get("query").ok_or_else(|| {
        QuiverError::InvalidQuery("constant query requires a 'query'".to_string())
    })?;
    Ok(Box::new(ConstScorer::new(parse_query(query, leaf)?, score)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_query;
    use crate::query::{Scorer, TermScorer};
    use crate::{DocId, QuiverError, Score};

    fn leaf(field: &str, value: &str) -> Box<dyn Scorer> {
        let postings = match (field, value) {
            ("name", "john") => vec![1, 2, 5],
            ("name", "johnny") => vec![2, 9],
            ("city", "paris") => vec![2, 5, 9],
            _ => vec![],
        };
        Box::new(TermScorer::new(10, format!("{field}:{value}"), postings))
    }

    fn drive(query_json: serde_json::Value) -> Vec<(DocId, Score)> {
        let mut scorer = parse_query(&query_json, &leaf).unwrap();
        let mut emitted = Vec::new();
        scorer.for_each(&mut |doc, score| emitted.push((doc, score)));
        emitted
    }

    #[test]
    fn test_parse_term_query() {
        let emitted = drive(json!({"term": {"field": "name", "value": "john"}}));
        let docs: Vec<DocId> = emitted.iter().map(|&(doc, _)| doc).collect();
        assert_eq!(docs, vec![1, 2, 5]);
    }

    #[test]
    fn test_parse_and_query() {
        let emitted = drive(json!({"and": [
            {"term": {"field": "name", "value": "john"}},
            {"term": {"field": "city", "value": "paris"}},
        ]}));
        let docs: Vec<DocId> = emitted.iter().map(|&(doc, _)| doc).collect();
        assert_eq!(docs, vec![2, 5]);
    }

    #[test]
    fn test_parse_or_query() {
        let emitted = drive(json!({"or": [
            {"term": {"field": "name", "value": "john"}},
            {"term": {"field": "name", "value": "johnny"}},
        ]}));
        let docs: Vec<DocId> = emitted.iter().map(|&(doc, _)| doc).collect();
        assert_eq!(docs, vec![1, 2, 5, 9]);
    }

    #[test]
    fn test_parse_and_not_query() {
        let emitted = drive(json!({"and_not": {
            "positive": {"term": {"field": "name", "value": "john"}},
            "excluded": [{"term": {"field": "name", "value": "johnny"}}],
        }}));
        let docs: Vec<DocId> = emitted.iter().map(|&(doc, _)| doc).collect();
        assert_eq!(docs, vec![1, 5]);
    }

    #[test]
    fn test_parse_dis_max_query() {
        let emitted = drive(json!({"dis_max": {
            "tie_breaker": 0.0,
            "queries": [
                {"term": {"field": "name", "value": "john"}},
                {"term": {"field": "city", "value": "paris"}},
            ],
        }}));
        let docs: Vec<DocId> = emitted.iter().map(|&(doc, _)| doc).collect();
        assert_eq!(docs, vec![1, 2, 5, 9]);
        let idf_john = (1f32 + 10f32 / 3f32).ln();
        assert!((emitted[0].1 - idf_john).abs() < 1e-6);
    }

    #[test]
    fn test_parse_constant_query() {
        let emitted = drive(json!({"constant": {
            "score": 3.5,
            "query": {"or": [
                {"term": {"field": "name", "value": "john"}},
                {"term": {"field": "name", "value": "johnny"}},
            ]},
        }}));
        assert_eq!(emitted, vec![(1, 3.5), (2, 3.5), (5, 3.5), (9, 3.5)]);
    }

    #[test]
    fn test_parse_boost() {
        let plain = drive(json!({"term": {"field": "name", "value": "john"}}));
        let boosted = drive(json!({"term": {"field": "name", "value": "john"}, "boost": 2.0}));
        for ((doc, score), (boosted_doc, boosted_score)) in plain.iter().zip(boosted.iter()) {
            assert_eq!(doc, boosted_doc);
            assert!((score * 2f32 - boosted_score).abs() < 1e-6);
        }
    }

    #[test]
    fn test_parse_nested_tree() {
        let emitted = drive(json!({"or": [
            {"and": [
                {"term": {"field": "name", "value": "john"}},
                {"term": {"field": "city", "value": "paris"}},
            ]},
            {"and_not": {
                "positive": {"term": {"field": "name", "value": "johnny"}},
                "excluded": [{"term": {"field": "city", "value": "paris"}}],
            }},
        ]}));
        let docs: Vec<DocId> = emitted.iter().map(|&(doc, _)| doc).collect();
        assert_eq!(docs, vec![2, 5]);
    }

    #[test]
    fn test_parse_unknown_kind_is_reported() {
        match parse_query(&json!({"fuzzy": {}}), &leaf) {
            Err(QuiverError::InvalidQuery(msg)) => assert_eq!(msg, "unknown query kind: fuzzy"),
            _ => panic!("expected an InvalidQuery error"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_queries() {
        assert!(parse_query(&json!([]), &leaf).is_err());
        assert!(parse_query(&json!({}), &leaf).is_err());
        assert!(parse_query(&json!({"term": {"field": "name"}}), &leaf).is_err());
        assert!(parse_query(&json!({"and": {}}), &leaf).is_err());
        assert!(
            parse_query(&json!({"and": [], "or": []}), &leaf).is_err(),
            "two kinds in one node"
        );
    }
}
