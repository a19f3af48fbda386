//! Integration tests for the query executer with scripted collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use solr_query::connection::Connection;
use solr_query::document::{Document, FieldValue, SolrDocument};
use solr_query::error::{Result, SolrError};
use solr_query::executer::QueryExecuter;
use solr_query::options::{FacetQuery, HighlightOptions, Order, QueryOptions, SortOrder};
use solr_query::params::Parameters;
use solr_query::query::{QueryByRange, SolrQuery};
use solr_query::randomizer::ListRandomizer;
use solr_query::results::{QueryResults, ResultParser};

const EMPTY_RESPONSE: &str = r#"<response>
  <lst name="responseHeader"><int name="status">0</int><int name="QTime">1</int></lst>
  <result name="response" numFound="0" start="0"/>
</response>"#;

/// Connection answering with scripted bodies and recording every request.
#[derive(Clone, Default)]
struct ScriptedConnection {
    responses: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<Parameters>>>,
}

impl ScriptedConnection {
    fn with_responses<I: IntoIterator<Item = String>>(responses: I) -> Self {
        ScriptedConnection {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<Parameters> {
        self.requests.lock().unwrap().clone()
    }
}

impl Connection for ScriptedConnection {
    fn get(&self, path: &str, parameters: &Parameters) -> Result<String> {
        assert_eq!(path, "/select");
        self.requests.lock().unwrap().push(parameters.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| EMPTY_RESPONSE.to_string()))
    }
}

/// Connection that always fails.
struct UnavailableConnection;

impl Connection for UnavailableConnection {
    fn get(&self, _path: &str, _parameters: &Parameters) -> Result<String> {
        Err(SolrError::status(503, "Service Unavailable"))
    }
}

/// Randomizer reversing the list and counting its calls.
#[derive(Clone, Default)]
struct ReversingRandomizer {
    calls: Arc<AtomicUsize>,
}

impl<T> ListRandomizer<T> for ReversingRandomizer {
    fn randomize(&self, items: &mut [T]) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        items.reverse();
    }
}

/// A typed document with a numeric unique key.
#[derive(Debug, Clone, PartialEq)]
struct TestDocument {
    id: i64,
    name: Option<String>,
}

impl SolrDocument for TestDocument {
    fn unique_key(&self) -> Option<String> {
        Some(self.id.to_string())
    }

    fn from_document(document: Document) -> Result<Self> {
        let id = document
            .get_field("id")
            .and_then(FieldValue::as_integer)
            .ok_or_else(|| SolrError::document("missing integer id"))?;
        let name = document
            .get_field("name")
            .and_then(FieldValue::as_text)
            .map(str::to_string);
        Ok(TestDocument { id, name })
    }
}

fn response(num_found: u64, docs: &[(i64, Option<&str>)]) -> String {
    let docs: String = docs
        .iter()
        .map(|(id, name)| {
            let name = name
                .map(|n| format!(r#"<str name="name">{n}</str>"#))
                .unwrap_or_default();
            format!(r#"<doc><long name="id">{id}</long>{name}</doc>"#)
        })
        .collect();
    format!(
        r#"<response><lst name="responseHeader"><int name="status">0</int><int name="QTime">2</int></lst><result name="response" numFound="{num_found}" start="0">{docs}</result></response>"#
    )
}

fn expected(pairs: &[(&str, &str)]) -> Parameters {
    pairs.iter().copied().collect()
}

#[test]
fn test_execute_sends_query_and_default_rows() -> Result<()> {
    let connection = ScriptedConnection::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone());

    let results = executer.execute(&SolrQuery::new("id:123456"), &QueryOptions::default())?;

    assert!(results.is_empty());
    assert_eq!(
        connection.requests(),
        vec![expected(&[("q", "id:123456"), ("rows", "10")])]
    );
    Ok(())
}

#[test]
fn test_sort_single_field() -> Result<()> {
    let connection = ScriptedConnection::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone());

    let options = QueryOptions::new().sort_by(vec![SortOrder::new("id")]);
    executer.execute(&SolrQuery::new("*:*"), &options)?;

    assert_eq!(connection.requests()[0].get("sort"), Some("id asc"));
    Ok(())
}

#[test]
fn test_sort_multiple_fields_with_orders() -> Result<()> {
    let connection = ScriptedConnection::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone());

    let options = QueryOptions::new().sort_by(vec![
        SortOrder::with_order("id", Order::Asc),
        SortOrder::with_order("name", Order::Desc),
    ]);
    executer.execute(&SolrQuery::new("*:*"), &options)?;

    assert_eq!(connection.requests()[0].get("sort"), Some("id asc,name desc"));
    Ok(())
}

#[test]
fn test_result_fields() -> Result<()> {
    let connection = ScriptedConnection::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone());

    executer.execute(&SolrQuery::new("*:*"), &QueryOptions::new().fields(["id", "name"]))?;

    assert_eq!(connection.requests()[0].get("fl"), Some("id,name"));
    Ok(())
}

#[test]
fn test_facets() -> Result<()> {
    let connection = ScriptedConnection::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone());

    let options = QueryOptions::new()
        .facet(FacetQuery::field("Id"))
        .facet(FacetQuery::query(QueryByRange::new("id", "1", "5")))
        .facet(FacetQuery::field("cat"));
    executer.execute(&SolrQuery::new(""), &options)?;

    let requests = connection.requests();
    let params = &requests[0];
    assert_eq!(params.get("q"), Some(""));
    assert_eq!(params.get("facet"), Some("true"));
    assert_eq!(params.get_all("facet"), vec!["true"]);
    assert_eq!(params.get_all("facet.field"), vec!["Id", "cat"]);
    assert_eq!(params.get_all("facet.query"), vec!["id:[1 TO 5]"]);
    Ok(())
}

#[test]
fn test_highlighting() -> Result<()> {
    let connection = ScriptedConnection::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone());

    let options = QueryOptions::new()
        .highlight(HighlightOptions::new(["field1"]).markup("before", "after"));
    executer.execute(&SolrQuery::new("*:*"), &options)?;

    let requests = connection.requests();
    let params = &requests[0];
    assert_eq!(params.get("hl"), Some("true"));
    assert_eq!(params.get("hl.fl"), Some("field1"));
    assert_eq!(params.get("hl.simple.pre"), Some("before"));
    assert_eq!(params.get("hl.simple.post"), Some("after"));
    Ok(())
}

#[test]
fn test_documents_are_decoded_into_the_target_type() -> Result<()> {
    let connection =
        ScriptedConnection::with_responses([response(2, &[(1, Some("one")), (2, None)])]);
    let executer = QueryExecuter::<TestDocument>::new(connection);

    let results = executer.execute(&SolrQuery::all(), &QueryOptions::default())?;

    assert_eq!(results.num_found, 2);
    assert_eq!(
        results.documents,
        vec![
            TestDocument {
                id: 1,
                name: Some("one".to_string())
            },
            TestDocument { id: 2, name: None },
        ]
    );
    Ok(())
}

#[test]
fn test_random_order_two_passes() -> Result<()> {
    let connection = ScriptedConnection::with_responses([
        response(3, &[(123, None), (456, None), (567, None)]),
        // The server answers the second pass in its own order.
        response(2, &[(456, Some("b")), (567, Some("c"))]),
    ]);
    let randomizer = ReversingRandomizer::default();
    let executer = QueryExecuter::<TestDocument>::new(connection.clone())
        .with_randomizer(randomizer.clone());

    let options = QueryOptions::new().random_order().rows(2).fields(["id", "name"]);
    let results = executer.execute(&SolrQuery::new("name:*"), &options)?;

    let requests = connection.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0],
        expected(&[("q", "name:*"), ("rows", "2147483647"), ("fl", "id")])
    );
    assert_eq!(requests[1].get("q"), Some("(id:567 OR id:456)"));
    assert_eq!(requests[1].get("rows"), Some("2"));
    assert_eq!(requests[1].get("fl"), Some("id,name"));
    assert!(!requests[1].contains_key("sort"));

    assert_eq!(randomizer.calls.load(Ordering::SeqCst), 1);
    let ids: Vec<i64> = results.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![567, 456]);
    assert_eq!(results.num_found, 3);
    Ok(())
}

#[test]
fn test_random_order_keeps_filters_in_both_passes() -> Result<()> {
    let connection = ScriptedConnection::with_responses([
        response(1, &[(7, None)]),
        response(1, &[(7, Some("seven"))]),
    ]);
    let executer = QueryExecuter::<TestDocument>::new(connection.clone())
        .with_randomizer(ReversingRandomizer::default());

    let options = QueryOptions::new()
        .random_order()
        .filter(Box::new(SolrQuery::new("type:book")));
    executer.execute(&SolrQuery::all(), &options)?;

    let requests = connection.requests();
    assert_eq!(requests[0].get_all("fq"), vec!["type:book"]);
    assert_eq!(requests[1].get_all("fq"), vec!["type:book"]);
    assert_eq!(requests[1].get("q"), Some("(id:7)"));
    Ok(())
}

/// A typed document that cannot be built without its title.
#[derive(Debug, Clone, PartialEq)]
struct Book {
    id: String,
    title: String,
}

impl SolrDocument for Book {
    fn unique_key(&self) -> Option<String> {
        Some(self.id.clone())
    }

    fn from_document(document: Document) -> Result<Self> {
        let text = |name: &str| {
            document
                .get_field(name)
                .and_then(FieldValue::as_text)
                .map(str::to_string)
                .ok_or_else(|| SolrError::document(format!("missing {name}")))
        };
        Ok(Book {
            id: text("id")?,
            title: text("title")?,
        })
    }
}

#[test]
fn test_random_order_builds_typed_documents_from_full_response_only() -> Result<()> {
    let connection = ScriptedConnection::with_responses([
        r#"<response><result numFound="3" start="0">
  <doc><str name="id">a</str></doc>
  <doc><str name="id">b</str></doc>
  <doc><str name="id">c</str></doc>
</result></response>"#
            .to_string(),
        r#"<response><result numFound="2" start="0">
  <doc><str name="id">b</str><str name="title">B</str></doc>
  <doc><str name="id">c</str><str name="title">C</str></doc>
</result></response>"#
            .to_string(),
    ]);
    let executer =
        QueryExecuter::<Book>::new(connection.clone()).with_randomizer(ReversingRandomizer::default());

    let results = executer.execute(&SolrQuery::all(), &QueryOptions::new().random_order().rows(2))?;

    assert_eq!(connection.requests().len(), 2);
    assert_eq!(connection.requests()[1].get("q"), Some("(id:c OR id:b)"));
    assert_eq!(
        results.documents,
        vec![
            Book {
                id: "c".to_string(),
                title: "C".to_string()
            },
            Book {
                id: "b".to_string(),
                title: "B".to_string()
            },
        ]
    );
    assert_eq!(results.num_found, 3);
    Ok(())
}

#[test]
fn test_connection_errors_propagate() {
    let executer = QueryExecuter::<TestDocument>::new(UnavailableConnection);

    let err = executer
        .execute(&SolrQuery::all(), &QueryOptions::default())
        .unwrap_err();
    assert!(matches!(err, SolrError::Status { code: 503, .. }));

    let err = executer
        .execute(&SolrQuery::all(), &QueryOptions::new().random_order())
        .unwrap_err();
    assert!(matches!(err, SolrError::Status { code: 503, .. }));
}

#[test]
fn test_document_mapping_errors_propagate() {
    let body = r#"<response><result numFound="1" start="0"><doc><str name="name">no id</str></doc></result></response>"#;
    let connection = ScriptedConnection::with_responses([body.to_string()]);
    let executer = QueryExecuter::<TestDocument>::new(connection);

    let err = executer
        .execute(&SolrQuery::all(), &QueryOptions::default())
        .unwrap_err();
    assert!(matches!(err, SolrError::Document(_)));
}

/// Parser ignoring the body and returning fixed documents.
struct FixedParser;

impl ResultParser<Document> for FixedParser {
    fn parse(&self, body: &str) -> Result<QueryResults<Document>> {
        if body.is_empty() {
            return Err(SolrError::parse("empty body"));
        }
        Ok(QueryResults::new(vec![
            Document::builder().add_text("id", "fixed").build(),
        ]))
    }
}

#[test]
fn test_custom_parser() -> Result<()> {
    let executer = QueryExecuter::<Document>::new(ScriptedConnection::default())
        .with_parser(FixedParser);

    let results = executer.execute(&SolrQuery::all(), &QueryOptions::default())?;
    assert_eq!(results.len(), 1);
    assert_eq!(results.documents[0].unique_key(), Some("fixed".to_string()));
    Ok(())
}
