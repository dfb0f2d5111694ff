#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use stakeout::{Key, QueryPage, QueryRequest, Record, Store, StoreError};

/// One scripted answer for a point lookup.
pub enum GetStep {
    Missing,
    Found(Record),
    Fail(String),
}

/// One scripted answer for a query page.
pub enum QueryStep {
    Page(QueryPage),
    Fail(String),
}

/// Store double driven by a pre-scripted sequence of answers, recording
/// every request it sees. Once a script runs dry it keeps answering
/// "missing" / empty page, so exhaustion scenarios need no padding.
#[derive(Default)]
pub struct ScriptedStore {
    gets: Mutex<VecDeque<GetStep>>,
    queries: Mutex<VecDeque<QueryStep>>,
    pub get_calls: AtomicU32,
    pub query_calls: AtomicU32,
    pub seen_keys: Mutex<Vec<Record>>,
    pub seen_queries: Mutex<Vec<QueryRequest>>,
    pub puts: Mutex<Vec<(String, Record)>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gets(steps: Vec<GetStep>) -> Self {
        let store = Self::default();
        *store.gets.lock().unwrap() = steps.into();
        store
    }

    pub fn with_queries(steps: Vec<QueryStep>) -> Self {
        let store = Self::default();
        *store.queries.lock().unwrap() = steps.into();
        store
    }

    pub fn get_calls(&self) -> u32 {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> u32 {
        self.query_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for ScriptedStore {
    async fn get_item(&self, _table: &str, key: &Key) -> Result<Option<Record>, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_keys.lock().unwrap().push(key.attributes());

        match self.gets.lock().unwrap().pop_front() {
            Some(GetStep::Found(record)) => Ok(Some(record)),
            Some(GetStep::Fail(message)) => Err(StoreError::rejected(message)),
            Some(GetStep::Missing) | None => Ok(None),
        }
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryPage, StoreError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_queries.lock().unwrap().push(request.clone());

        match self.queries.lock().unwrap().pop_front() {
            Some(QueryStep::Page(page)) => Ok(page),
            Some(QueryStep::Fail(message)) => Err(StoreError::rejected(message)),
            None => Ok(QueryPage::default()),
        }
    }

    async fn put_item(&self, table: &str, record: &Record) -> Result<(), StoreError> {
        self.puts
            .lock()
            .unwrap()
            .push((table.to_string(), record.clone()));
        Ok(())
    }
}

/// Build a record from (attribute, value) pairs.
pub fn record(pairs: &[(&str, serde_json::Value)]) -> Record {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}
