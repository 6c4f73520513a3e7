use tracing::{info, warn};

use crate::core::Result;
use crate::modules::settings::models::billing_settings::BILLING_PAGE_KEY;
use crate::modules::settings::models::site_content::{ABOUT_PAGE_KEY, SHOP_PAGE_KEY};
use crate::modules::settings::models::{
    default_about_settings, default_shop_settings, AboutSettings, BillingSettings,
    BillingSettingsForm, ShopSettings,
};
use crate::modules::settings::repositories::SettingsRepository;

/// Service for merchant billing settings and storefront content
#[derive(Clone)]
pub struct SettingsService {
    repo: SettingsRepository,
}

impl SettingsService {
    pub fn new(repo: SettingsRepository) -> Self {
        Self { repo }
    }

    /// Resolve the billing settings. A missing row resolves to the defaults;
    /// store failures propagate.
    pub async fn fetch_billing_settings(&self) -> Result<BillingSettings> {
        let content = self
            .repo
            .find_content(BILLING_PAGE_KEY)
            .await?
            .unwrap_or_default();

        Ok(BillingSettings::from_content(&content))
    }

    pub async fn update_billing_settings(
        &self,
        form: BillingSettingsForm,
    ) -> Result<BillingSettings> {
        let settings = form.resolve()?;
        self.repo
            .save_content(BILLING_PAGE_KEY, settings.to_content())
            .await?;

        info!(
            "Billing settings updated: company={}, cgst={}%, sgst={}%",
            settings.company_name, settings.tax_rate_cgst, settings.tax_rate_sgst
        );
        Ok(settings)
    }

    /// Shop landing content; unreadable content degrades to the defaults
    pub async fn shop_settings(&self) -> ShopSettings {
        match self.repo.find_content(SHOP_PAGE_KEY).await {
            Ok(Some(content)) => ShopSettings::from_content(&content),
            Ok(None) => default_shop_settings(),
            Err(e) => {
                warn!("Shop settings unavailable, serving defaults: {}", e);
                default_shop_settings()
            }
        }
    }

    pub async fn update_shop_settings(&self, settings: ShopSettings) -> Result<ShopSettings> {
        self.repo
            .save_content(SHOP_PAGE_KEY, settings.to_content())
            .await?;
        info!("Shop settings updated");
        Ok(settings)
    }

    /// About Us content for the admin editor
    pub async fn about_settings(&self) -> AboutSettings {
        match self.repo.find_content(ABOUT_PAGE_KEY).await {
            Ok(Some(content)) => AboutSettings::from_content(&content, &default_about_settings()),
            Ok(None) => default_about_settings(),
            Err(e) => {
                warn!("About Us content unavailable, serving defaults: {}", e);
                default_about_settings()
            }
        }
    }

    /// About Us content for the public page. Anything short of a stored row
    /// shows the loading-error placeholder.
    pub async fn public_about(&self) -> AboutSettings {
        let placeholder = AboutSettings::unavailable();
        match self.repo.find_content(ABOUT_PAGE_KEY).await {
            Ok(Some(content)) => AboutSettings::from_content(&content, &placeholder),
            Ok(None) => placeholder,
            Err(e) => {
                warn!("About Us content unavailable: {}", e);
                placeholder
            }
        }
    }

    pub async fn update_about_settings(&self, settings: AboutSettings) -> Result<AboutSettings> {
        self.repo
            .save_content(ABOUT_PAGE_KEY, settings.to_content())
            .await?;
        info!("About Us content updated");
        Ok(settings)
    }
}
