//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use autoparts_provider::{
    BrandModelPair, DetailRecord, InventoryKey, PartQuery, PartResult, PartsApi, ProviderError,
    Result,
};
use tokio::sync::{Notify, RwLock, Semaphore};

use crate::navigation::PartsSession;
use crate::services::ServiceContext;

// ===== Gate =====

/// Holds calls made while it is closed until the test lets them through.
pub struct Gate {
    held: AtomicBool,
    entered: Notify,
    release: Semaphore,
}

impl Gate {
    fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
            entered: Notify::new(),
            release: Semaphore::new(0),
        }
    }

    /// 之后进入的调用会被挂起
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    /// 之后进入的调用不再挂起（已挂起的不受影响）
    pub fn open(&self) {
        self.held.store(false, Ordering::SeqCst);
    }

    /// 放行一个已挂起的调用
    pub fn release_one(&self) {
        self.release.add_permits(1);
    }

    /// 等待有调用进入
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    async fn pass(&self) {
        let held = self.held.load(Ordering::SeqCst);
        self.entered.notify_one();
        if held && let Ok(permit) = self.release.acquire().await {
            permit.forget();
        }
    }
}

// ===== MockPartsApi =====

pub struct MockPartsApi {
    pairs: RwLock<Result<Vec<BrandModelPair>>>,
    /// 依次返回；队列为空时返回空列表
    search_responses: RwLock<VecDeque<Result<Vec<PartResult>>>>,
    detail_response: RwLock<Result<DetailRecord>>,

    pub queries: RwLock<Vec<PartQuery>>,
    pub detail_ids: RwLock<Vec<i64>>,
    pub inventory_keys: RwLock<Vec<InventoryKey>>,

    pub list_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub get_part_calls: AtomicUsize,
    pub inventory_calls: AtomicUsize,

    pub catalog_gate: Gate,
    pub search_gate: Gate,
    pub detail_gate: Gate,
}

impl MockPartsApi {
    pub fn new() -> Self {
        Self {
            pairs: RwLock::new(Ok(Vec::new())),
            search_responses: RwLock::new(VecDeque::new()),
            detail_response: RwLock::new(Ok(DetailRecord::default())),
            queries: RwLock::new(Vec::new()),
            detail_ids: RwLock::new(Vec::new()),
            inventory_keys: RwLock::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            get_part_calls: AtomicUsize::new(0),
            inventory_calls: AtomicUsize::new(0),
            catalog_gate: Gate::new(),
            search_gate: Gate::new(),
            detail_gate: Gate::new(),
        }
    }

    pub async fn set_pairs(&self, pairs: Result<Vec<BrandModelPair>>) {
        *self.pairs.write().await = pairs;
    }

    pub async fn push_search(&self, response: Result<Vec<PartResult>>) {
        self.search_responses.write().await.push_back(response);
    }

    pub async fn set_detail(&self, response: Result<DetailRecord>) {
        *self.detail_response.write().await = response;
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PartsApi for MockPartsApi {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_brand_models(&self) -> Result<Vec<BrandModelPair>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let response = self.pairs.read().await.clone();
        self.catalog_gate.pass().await;
        response
    }

    async fn search_parts(&self, query: &PartQuery) -> Result<Vec<PartResult>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.write().await.push(query.clone());
        let response = self
            .search_responses
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        self.search_gate.pass().await;
        response
    }

    async fn get_part(&self, id: i64) -> Result<DetailRecord> {
        self.get_part_calls.fetch_add(1, Ordering::SeqCst);
        self.detail_ids.write().await.push(id);
        let response = self.detail_response.read().await.clone();
        self.detail_gate.pass().await;
        response
    }

    async fn find_inventory(&self, key: &InventoryKey) -> Result<DetailRecord> {
        self.inventory_calls.fetch_add(1, Ordering::SeqCst);
        self.inventory_keys.write().await.push(key.clone());
        let response = self.detail_response.read().await.clone();
        self.detail_gate.pass().await;
        response
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockPartsApi>) {
    let api = Arc::new(MockPartsApi::new());
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (ctx, api)
}

/// 创建测试用 `PartsSession`
pub fn create_test_session() -> (Arc<PartsSession>, Arc<MockPartsApi>) {
    let (ctx, api) = create_test_context();
    (Arc::new(PartsSession::new(ctx)), api)
}

/// 连接失败
pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}

/// 搜索结果行
pub fn row(id: i64, vendor: Option<&str>, descripcion: &str) -> PartResult {
    PartResult {
        id,
        descripcion: Some(descripcion.to_string()),
        modelo: Some("COROLLA".to_string()),
        ano: Some("2012".to_string()),
        nombre_empresa: vendor.map(str::to_string),
        ..PartResult::default()
    }
}

pub fn pair(marca: &str, modelo: &str) -> BrandModelPair {
    BrandModelPair {
        marca: marca.to_string(),
        modelo: modelo.to_string(),
    }
}
