use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::{Basket, CartState};
use crate::domain::cart::value_objects::{ProductId, Quantity};
use crate::domain::logger::Logger;
use crate::domain::order::model::OrderSummary;

/// Client-side holder of the cart session.
///
/// Every action marks the state as loading, calls the gateway without
/// holding the lock, and then replaces the basket with whatever the backend
/// answered. Failures are recorded in `CartState::error` (and returned to
/// the caller) while the previous basket is left untouched.
///
/// Overlapping actions are not sequenced: the response applied last wins.
pub struct CartStore {
    gateway: Arc<dyn CartGateway>,
    logger: Arc<dyn Logger>,
    state: RwLock<CartState>,
}

impl CartStore {
    pub fn new(gateway: Arc<dyn CartGateway>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            state: RwLock::new(CartState::default()),
        }
    }

    pub async fn snapshot(&self) -> CartState {
        self.state.read().await.clone()
    }

    pub async fn fetch_cart(&self) -> Result<CartState, CartError> {
        self.begin().await;
        match self.gateway.fetch_cart().await {
            Ok(basket) => Ok(self.apply(basket.unwrap_or_default()).await),
            Err(err) => Err(self.fail("fetch_cart", err.into()).await),
        }
    }

    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<CartState, CartError> {
        self.logger.debug(&format!(
            "Adding {} units of product {} to cart",
            quantity, product_id
        ));
        self.begin().await;
        match self.gateway.add_to_cart(product_id, quantity).await {
            Ok(basket) => Ok(self.apply(basket).await),
            Err(err) => Err(self.fail("add_to_cart", err.into()).await),
        }
    }

    pub async fn remove_from_cart(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<CartState, CartError> {
        self.logger.debug(&format!(
            "Removing {} units of product {} from cart",
            quantity, product_id
        ));
        self.begin().await;
        match self.gateway.remove_from_cart(product_id, quantity).await {
            Ok(basket) => Ok(self.apply(basket).await),
            Err(err) => Err(self.fail("remove_from_cart", err.into()).await),
        }
    }

    /// Drops the whole line for `product_id`, using the quantity currently
    /// held in the snapshot.
    pub async fn remove_line(&self, product_id: ProductId) -> Result<CartState, CartError> {
        let quantity = {
            let state = self.state.read().await;
            state.basket.line(product_id).map(|line| line.quantity)
        };

        let Some(quantity) = quantity.and_then(|units| Quantity::new(units).ok()) else {
            return Err(self.fail("remove_line", CartError::ItemNotInCart).await);
        };

        self.remove_from_cart(product_id, quantity).await
    }

    /// Removes every line in the current snapshot, one request at a time.
    /// Stops at the first failure.
    pub async fn clear_cart(&self) -> Result<CartState, CartError> {
        let lines: Vec<(ProductId, Quantity)> = {
            let state = self.state.read().await;
            state
                .items()
                .iter()
                .filter_map(|line| {
                    Quantity::new(line.quantity)
                        .ok()
                        .map(|quantity| (line.product_id, quantity))
                })
                .collect()
        };

        self.logger
            .info(&format!("Clearing cart with {} lines", lines.len()));

        for (product_id, quantity) in lines {
            self.remove_from_cart(product_id, quantity).await?;
        }

        Ok(self.snapshot().await)
    }

    /// Places an order for the current basket. On success the local cart is
    /// reset to empty and the basket id is forgotten.
    pub async fn create_order(&self) -> Result<OrderSummary, CartError> {
        self.begin().await;
        match self.gateway.create_order().await {
            Ok(order) => {
                self.apply(Basket::empty()).await;
                self.logger.info(&format!("Order created: {}", order.id));
                Ok(order)
            }
            Err(err) => Err(self.fail("create_order", err.into()).await),
        }
    }

    async fn begin(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn apply(&self, basket: Basket) -> CartState {
        let mut state = self.state.write().await;
        state.basket = basket;
        state.loading = false;
        state.clone()
    }

    // Loading is cleared on failure too, otherwise the session stays busy forever.
    async fn fail(&self, action: &str, err: CartError) -> CartError {
        self.logger
            .warn(&format!("Cart action {} failed: {}", action, err));
        let mut state = self.state.write().await;
        state.error = Some(err.to_string());
        state.loading = false;
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::cart::value_objects::BasketId;
    use crate::domain::errors::GatewayError;
    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Mutex, oneshot};

    mock! {
        pub CartGw {}

        #[async_trait]
        impl CartGateway for CartGw {
            async fn fetch_cart(&self) -> Result<Option<Basket>, GatewayError>;
            async fn add_to_cart(&self, product_id: ProductId, quantity: Quantity) -> Result<Basket, GatewayError>;
            async fn remove_from_cart(&self, product_id: ProductId, quantity: Quantity) -> Result<Basket, GatewayError>;
            async fn create_order(&self) -> Result<OrderSummary, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn qty(units: u32) -> Quantity {
        Quantity::new(units).unwrap()
    }

    fn line(product_id: i64, quantity: u32, price: i64) -> CartItem {
        CartItem {
            product_id: ProductId::new(product_id),
            name: format!("Product {}", product_id),
            price: BigDecimal::from(price),
            quantity,
            image_urls: vec![],
        }
    }

    fn basket(items: Vec<CartItem>, total: i64) -> Basket {
        Basket {
            basket_id: Some(BasketId::new("basket-1")),
            items,
            total_price: BigDecimal::from(total),
        }
    }

    fn order(id: i64) -> OrderSummary {
        OrderSummary {
            id,
            created_at: None,
            total: BigDecimal::from(2000),
        }
    }

    async fn seeded_store(mut gateway: MockCartGw, seed: Basket) -> CartStore {
        let seed_clone = seed.clone();
        gateway
            .expect_fetch_cart()
            .times(1)
            .returning(move || Ok(Some(seed_clone.clone())));
        let store = CartStore::new(Arc::new(gateway), mock_logger());
        store.fetch_cart().await.unwrap();
        store
    }

    #[tokio::test]
    async fn should_mirror_add_response_exactly() {
        let response = Basket {
            basket_id: None,
            items: vec![line(42, 2, 1000)],
            total_price: BigDecimal::from(2000),
        };
        let expected = response.clone();

        let mut gateway = MockCartGw::new();
        gateway
            .expect_add_to_cart()
            .with(eq(ProductId::new(42)), eq(qty(2)))
            .times(1)
            .returning(move |_, _| Ok(response.clone()));

        let store = CartStore::new(Arc::new(gateway), mock_logger());
        let state = store.add_to_cart(ProductId::new(42), qty(2)).await.unwrap();

        assert_eq!(state.basket, expected);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(store.snapshot().await, state);
    }

    #[tokio::test]
    async fn should_trust_server_quantity_over_client_addition() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_add_to_cart()
            .times(2)
            .returning(|_, _| Ok(basket(vec![line(42, 5, 1000)], 5000)));
        gateway
            .expect_fetch_cart()
            .returning(|| Ok(Some(basket(vec![line(42, 5, 1000)], 5000))));

        let store = CartStore::new(Arc::new(gateway), mock_logger());
        store.add_to_cart(ProductId::new(42), qty(2)).await.unwrap();
        store.add_to_cart(ProductId::new(42), qty(2)).await.unwrap();
        let state = store.fetch_cart().await.unwrap();

        assert_eq!(state.basket.line(ProductId::new(42)).unwrap().quantity, 5);
        assert_eq!(state.total_price(), &BigDecimal::from(5000));
    }

    #[tokio::test]
    async fn should_not_recompute_total_from_lines() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_add_to_cart()
            .returning(|_, _| Ok(basket(vec![line(1, 2, 1000)], 1500)));

        let store = CartStore::new(Arc::new(gateway), mock_logger());
        let state = store.add_to_cart(ProductId::new(1), qty(2)).await.unwrap();

        assert_eq!(state.total_price(), &BigDecimal::from(1500));
    }

    #[tokio::test]
    async fn should_drop_line_when_server_removes_it() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_remove_from_cart()
            .with(eq(ProductId::new(42)), eq(qty(2)))
            .returning(|_, _| Ok(basket(vec![line(7, 1, 300)], 300)));
        let store = seeded_store(
            gateway,
            basket(vec![line(7, 1, 300), line(42, 2, 1000)], 2300),
        )
        .await;

        let state = store
            .remove_from_cart(ProductId::new(42), qty(2))
            .await
            .unwrap();

        assert!(state.basket.line(ProductId::new(42)).is_none());
        assert_eq!(state.items().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_prior_basket_and_set_error_when_fetch_fails() {
        let mut gateway = MockCartGw::new();
        let mut calls = 0;
        gateway.expect_fetch_cart().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(Some(basket(vec![line(42, 2, 1000)], 2000)))
            } else {
                Err(GatewayError::transport("connection reset"))
            }
        });

        let store = CartStore::new(Arc::new(gateway), mock_logger());
        let before = store.fetch_cart().await.unwrap();
        let result = store.fetch_cart().await;
        let after = store.snapshot().await;

        assert!(matches!(result.unwrap_err(), CartError::Gateway(_)));
        assert_eq!(after.basket, before.basket);
        assert_eq!(
            after.error.as_deref(),
            Some("gateway.transport: connection reset")
        );
        assert!(!after.loading);
    }

    #[tokio::test]
    async fn should_treat_missing_basket_as_empty() {
        let mut gateway = MockCartGw::new();
        gateway.expect_fetch_cart().returning(|| Ok(None));

        let store = CartStore::new(Arc::new(gateway), mock_logger());
        let state = store.fetch_cart().await.unwrap();

        assert!(state.is_empty());
        assert!(state.basket_id().is_none());
        assert_eq!(state.total_price(), &BigDecimal::from(0));
    }

    #[tokio::test]
    async fn should_clear_error_when_next_action_starts() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_add_to_cart()
            .times(1)
            .returning(|_, _| Err(GatewayError::status(409, "insufficient stock")));
        gateway
            .expect_fetch_cart()
            .returning(|| Ok(Some(basket(vec![], 0))));

        let store = CartStore::new(Arc::new(gateway), mock_logger());
        assert!(store.add_to_cart(ProductId::new(3), qty(1)).await.is_err());
        assert!(store.snapshot().await.error.is_some());

        let state = store.fetch_cart().await.unwrap();
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn should_reset_cart_when_order_created() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_create_order()
            .times(1)
            .returning(|| Ok(order(77)));
        let store = seeded_store(
            gateway,
            basket(vec![line(42, 2, 1000), line(7, 1, 300)], 2300),
        )
        .await;

        let created = store.create_order().await.unwrap();
        let state = store.snapshot().await;

        assert_eq!(created.id, 77);
        assert!(state.is_empty());
        assert_eq!(state.total_price(), &BigDecimal::from(0));
        assert!(state.basket_id().is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn should_keep_cart_when_order_fails() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_create_order()
            .returning(|| Err(GatewayError::status(400, "address missing")));
        let seed = basket(vec![line(42, 2, 1000)], 2000);
        let store = seeded_store(gateway, seed.clone()).await;

        assert!(store.create_order().await.is_err());
        let state = store.snapshot().await;

        assert_eq!(state.basket, seed);
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn should_remove_whole_line_using_snapshot_quantity() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_remove_from_cart()
            .with(eq(ProductId::new(42)), eq(qty(3)))
            .times(1)
            .returning(|_, _| Ok(basket(vec![], 0)));
        let store = seeded_store(gateway, basket(vec![line(42, 3, 1000)], 3000)).await;

        let state = store.remove_line(ProductId::new(42)).await.unwrap();

        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn should_reject_remove_line_for_unknown_product_without_calling_backend() {
        let gateway = MockCartGw::new();
        let store = seeded_store(gateway, basket(vec![line(42, 3, 1000)], 3000)).await;

        let result = store.remove_line(ProductId::new(5)).await;
        let state = store.snapshot().await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotInCart));
        assert_eq!(state.error.as_deref(), Some("cart.item_not_in_cart"));
        assert_eq!(state.items().len(), 1);
    }

    #[tokio::test]
    async fn should_clear_every_line_sequentially() {
        let mut gateway = MockCartGw::new();
        let mut seq = mockall::Sequence::new();
        gateway
            .expect_remove_from_cart()
            .with(eq(ProductId::new(1)), eq(qty(2)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(basket(vec![line(2, 1, 500)], 500)));
        gateway
            .expect_remove_from_cart()
            .with(eq(ProductId::new(2)), eq(qty(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(basket(vec![], 0)));
        let store = seeded_store(
            gateway,
            basket(vec![line(1, 2, 1000), line(2, 1, 500)], 2500),
        )
        .await;

        let state = store.clear_cart().await.unwrap();

        assert!(state.is_empty());
        assert_eq!(state.total_price(), &BigDecimal::from(0));
    }

    #[tokio::test]
    async fn should_stop_clearing_at_first_failure() {
        let mut gateway = MockCartGw::new();
        gateway
            .expect_remove_from_cart()
            .times(1)
            .returning(|_, _| Err(GatewayError::transport("offline")));
        let seed = basket(vec![line(1, 2, 1000), line(2, 1, 500)], 2500);
        let store = seeded_store(gateway, seed.clone()).await;

        assert!(store.clear_cart().await.is_err());
        assert_eq!(store.snapshot().await.basket, seed);
    }

    /// Gateway whose add/remove responses are released by the test.
    struct ScriptedGateway {
        add: Mutex<Option<oneshot::Receiver<Basket>>>,
        remove: Mutex<Option<oneshot::Receiver<Basket>>>,
        in_flight: AtomicUsize,
    }

    impl ScriptedGateway {
        async fn wait(
            &self,
            slot: &Mutex<Option<oneshot::Receiver<Basket>>>,
        ) -> Result<Basket, GatewayError> {
            let receiver = slot.lock().await.take();
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            match receiver {
                Some(receiver) => receiver
                    .await
                    .map_err(|_| GatewayError::transport("response dropped")),
                None => Err(GatewayError::transport("unexpected call")),
            }
        }
    }

    #[async_trait]
    impl CartGateway for ScriptedGateway {
        async fn fetch_cart(&self) -> Result<Option<Basket>, GatewayError> {
            Ok(None)
        }
        async fn add_to_cart(&self, _: ProductId, _: Quantity) -> Result<Basket, GatewayError> {
            self.wait(&self.add).await
        }
        async fn remove_from_cart(
            &self,
            _: ProductId,
            _: Quantity,
        ) -> Result<Basket, GatewayError> {
            self.wait(&self.remove).await
        }
        async fn create_order(&self) -> Result<OrderSummary, GatewayError> {
            Err(GatewayError::transport("unexpected call"))
        }
    }

    async fn race(add_lands_last: bool) -> (Basket, Basket, CartState) {
        let (add_tx, add_rx) = oneshot::channel();
        let (remove_tx, remove_rx) = oneshot::channel();
        let gateway = Arc::new(ScriptedGateway {
            add: Mutex::new(Some(add_rx)),
            remove: Mutex::new(Some(remove_rx)),
            in_flight: AtomicUsize::new(0),
        });
        let store = Arc::new(CartStore::new(gateway.clone(), mock_logger()));

        let add_task = tokio::spawn({
            let store = store.clone();
            async move { store.add_to_cart(ProductId::new(42), qty(1)).await }
        });
        let remove_task = tokio::spawn({
            let store = store.clone();
            async move { store.remove_from_cart(ProductId::new(42), qty(1)).await }
        });

        while gateway.in_flight.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }

        let add_response = basket(vec![line(42, 3, 1000)], 3000);
        let remove_response = basket(vec![line(42, 1, 1000)], 1000);

        if add_lands_last {
            remove_tx.send(remove_response.clone()).unwrap();
            remove_task.await.unwrap().unwrap();
            add_tx.send(add_response.clone()).unwrap();
            add_task.await.unwrap().unwrap();
        } else {
            add_tx.send(add_response.clone()).unwrap();
            add_task.await.unwrap().unwrap();
            remove_tx.send(remove_response.clone()).unwrap();
            remove_task.await.unwrap().unwrap();
        }

        (add_response, remove_response, store.snapshot().await)
    }

    #[tokio::test]
    async fn should_keep_add_response_when_it_lands_second() {
        let (add_response, _, state) = race(true).await;
        assert_eq!(state.basket, add_response);
    }

    #[tokio::test]
    async fn should_keep_remove_response_when_it_lands_second() {
        let (_, remove_response, state) = race(false).await;
        assert_eq!(state.basket, remove_response);
    }

    #[tokio::test]
    async fn should_mark_loading_and_clear_error_while_call_is_pending() {
        let (add_tx, add_rx) = oneshot::channel();
        let gateway = Arc::new(ScriptedGateway {
            add: Mutex::new(Some(add_rx)),
            remove: Mutex::new(None),
            in_flight: AtomicUsize::new(0),
        });
        let store = Arc::new(CartStore::new(gateway.clone(), mock_logger()));

        // Leaves an error behind for the next action to clear
        assert!(store.remove_from_cart(ProductId::new(42), qty(1)).await.is_err());
        assert!(store.snapshot().await.error.is_some());

        let add_task = tokio::spawn({
            let store = store.clone();
            async move { store.add_to_cart(ProductId::new(42), qty(1)).await }
        });

        while gateway.in_flight.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }

        let pending = store.snapshot().await;
        assert!(pending.loading);
        assert!(pending.error.is_none());

        add_tx.send(basket(vec![line(42, 1, 1000)], 1000)).unwrap();
        add_task.await.unwrap().unwrap();

        let done = store.snapshot().await;
        assert!(!done.loading);
        assert!(done.error.is_none());
    }
}
