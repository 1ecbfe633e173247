//! Currency Service - Application service for the coin totals
//!
//! The wallet lives for one page session and is never persisted.

use std::sync::{Arc, Mutex, PoisonError};

use charsheet_domain::{Denomination, Wallet};

use super::FieldReader;
use crate::ports::outbound::bindings;
use crate::ports::outbound::PagePort;

pub const INVALID_AMOUNT: &str = "Enter valid amount.";

#[derive(Clone)]
pub struct CurrencyService {
    page: Arc<dyn PagePort>,
    fields: FieldReader,
    wallet: Arc<Mutex<Wallet>>,
}

impl CurrencyService {
    /// Create a new CurrencyService with an empty wallet
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self {
            fields: FieldReader::new(Arc::clone(&page)),
            page,
            wallet: Arc::new(Mutex::new(Wallet::new())),
        }
    }

    /// Add the typed delta to one denomination; returns the new total
    pub fn add(&self, denomination: Denomination) -> Option<u64> {
        let binding = bindings::currency(denomination);
        let amount = match self.fields.read_amount(binding.input) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::debug!(denomination = %denomination, error = %e, "Amount rejected");
                self.page.alert(INVALID_AMOUNT);
                return None;
            }
        };
        self.fields.clear(binding.input);

        let result = self
            .wallet
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(denomination, amount);

        match result {
            Ok(total) => {
                tracing::info!(denomination = %denomination, delta = amount.value(), total, "Wallet updated");
                self.page
                    .set_text(binding.display, &denomination.format_total(total));
                Some(total)
            }
            Err(e) => {
                tracing::warn!(denomination = %denomination, error = %e, "Wallet change refused");
                self.page.alert(&e.to_string());
                None
            }
        }
    }

    pub fn wallet(&self) -> Wallet {
        *self.wallet.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryPage;

    fn service() -> (Arc<MemoryPage>, CurrencyService) {
        let page = Arc::new(MemoryPage::new());
        (page.clone(), CurrencyService::new(page))
    }

    #[test]
    fn totals_accumulate() {
        let (page, service) = service();
        let gold = bindings::currency(Denomination::Gold);

        page.type_into(gold.input, "50");
        assert_eq!(service.add(Denomination::Gold), Some(50));
        page.type_into(gold.input, "25");
        assert_eq!(service.add(Denomination::Gold), Some(75));

        assert_eq!(page.text(gold.display), "75 Gold pieces.");
        assert_eq!(page.field(gold.input), "");
        assert_eq!(service.wallet().total(Denomination::Silver), 0);
    }

    #[test]
    fn non_numeric_is_rejected() {
        let (page, service) = service();
        let copper = bindings::currency(Denomination::Copper);

        page.type_into(copper.input, "a handful");
        assert_eq!(service.add(Denomination::Copper), None);
        assert_eq!(page.alerts(), vec![INVALID_AMOUNT]);
        assert_eq!(page.text(copper.display), "");
    }

    #[test]
    fn overspending_leaves_total_unchanged() {
        let (page, service) = service();
        let silver = bindings::currency(Denomination::Silver);

        page.type_into(silver.input, "10");
        service.add(Denomination::Silver);
        page.type_into(silver.input, "-15");
        assert_eq!(service.add(Denomination::Silver), None);

        assert_eq!(service.wallet().total(Denomination::Silver), 10);
        assert_eq!(page.text(silver.display), "10 Silver pieces.");
        assert_eq!(page.alerts().len(), 1);
    }
}
