// Storefront content: shop landing text and the About Us page

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::content_text;
use crate::core::fields::into_record;
use crate::core::traits::Record;

pub const SHOP_PAGE_KEY: &str = "shop_settings";
pub const ABOUT_PAGE_KEY: &str = "about_us_content";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    pub shop_welcome_text: String,
    pub global_font: String,
}

pub fn default_shop_settings() -> ShopSettings {
    ShopSettings {
        shop_welcome_text:
            "Welcome! Browse our comprehensive selection of high-quality materials.".to_string(),
        global_font: "Arial, sans-serif".to_string(),
    }
}

impl ShopSettings {
    pub fn from_content(content: &Record) -> Self {
        let defaults = default_shop_settings();
        Self {
            shop_welcome_text: content_text(
                content,
                "shop_welcome_text",
                &defaults.shop_welcome_text,
            ),
            global_font: content_text(content, "global_font", &defaults.global_font),
        }
    }

    pub fn to_content(&self) -> Record {
        into_record(json!({
            "shop_welcome_text": self.shop_welcome_text,
            "global_font": self.global_font,
        }))
    }
}

/// About Us page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSettings {
    pub intro_text: String,
    pub body_text: String,
    pub image_url_1: String,
    pub image_url_2: String,
    pub image_url_3: String,
    pub map_url: String,
}

/// Initial About Us content shown to admins before anything is saved
pub fn default_about_settings() -> AboutSettings {
    AboutSettings {
        intro_text: "Your one-stop shop for all hardware needs. Since 1995, we've been proudly \
                     serving our community with high-quality products, expert advice, and a \
                     commitment to customer satisfaction."
            .to_string(),
        body_text: "Our knowledgeable staff is always on hand to help you find exactly what \
                    you're looking for, from the smallest nut and bolt to the most powerful of \
                    tools. Come visit us and experience the RK Construction difference."
            .to_string(),
        image_url_1: "https://placehold.co/400x300/e0f2f1/000?text=Symbol_1".to_string(),
        image_url_2: "https://placehold.co/400x300/e0f2f1/000?text=Symbol_2".to_string(),
        image_url_3: "https://placehold.co/400x300/e0f2f1/000?text=Symbol_3".to_string(),
        map_url: "https://www.google.com/maps/embed".to_string(),
    }
}

impl AboutSettings {
    /// Placeholder served on the public page when the content cannot be read
    pub fn unavailable() -> Self {
        Self {
            intro_text: "Content loading error.".to_string(),
            body_text: String::new(),
            image_url_1: String::new(),
            image_url_2: String::new(),
            image_url_3: String::new(),
            map_url: "Default Address".to_string(),
        }
    }

    /// Resolve stored content, filling missing fields from `fallback`
    pub fn from_content(content: &Record, fallback: &AboutSettings) -> Self {
        Self {
            intro_text: content_text(content, "intro_text", &fallback.intro_text),
            body_text: content_text(content, "body_text", &fallback.body_text),
            image_url_1: content_text(content, "image_url_1", &fallback.image_url_1),
            image_url_2: content_text(content, "image_url_2", &fallback.image_url_2),
            image_url_3: content_text(content, "image_url_3", &fallback.image_url_3),
            map_url: content_text(content, "map_url", &fallback.map_url),
        }
    }

    pub fn to_content(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(value) => into_record(value),
            Err(_) => Record::new(),
        }
    }
}
