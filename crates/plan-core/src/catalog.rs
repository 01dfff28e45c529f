//! 產品目錄配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{PlanError, ProductEconomics, Result};

/// 目錄中的具名產品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// 產品名稱
    pub name: String,

    /// 經濟參數
    pub economics: ProductEconomics,
}

impl CatalogProduct {
    pub fn new(name: impl Into<String>, economics: ProductEconomics) -> Self {
        Self {
            name: name.into(),
            economics,
        }
    }
}

/// 產品目錄（有序、名稱唯一）
///
/// 以明確的配置結構傳入計劃器，不使用全域常數。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<CatalogProduct>,
}

impl ProductCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 參考目錄：三款鞋類產品
    pub fn reference() -> Self {
        let entries = [
            ("Sepatu Olahraga", 250_000, 180_000, Decimal::new(8, 1)),
            ("Sepatu Kasual", 200_000, 150_000, Decimal::new(10, 2)),
            ("Sepatu Formal", 180_000, 145_000, Decimal::new(15, 2)),
        ];

        let products = entries
            .into_iter()
            .map(|(name, price, cost, unit_time)| {
                CatalogProduct::new(
                    name,
                    ProductEconomics {
                        unit_price: Decimal::from(price),
                        unit_cost: Decimal::from(cost),
                        unit_time_hours: unit_time,
                    },
                )
            })
            .collect();

        Self { products }
    }

    /// 建構器模式：添加產品
    pub fn with_product(mut self, name: impl Into<String>, economics: ProductEconomics) -> Result<Self> {
        self.add_product(name, economics)?;
        Ok(self)
    }

    /// 添加產品（名稱重複或參數無效時拒絕）
    pub fn add_product(&mut self, name: impl Into<String>, economics: ProductEconomics) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(PlanError::DuplicateProduct(name));
        }
        economics.validate()?;
        self.products.push(CatalogProduct::new(name, economics));
        Ok(())
    }

    /// 依名稱查詢產品經濟參數
    pub fn get(&self, name: &str) -> Result<&ProductEconomics> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.economics)
            .ok_or_else(|| PlanError::ProductNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name == name)
    }

    /// 產品名稱（依定義順序）
    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 驗證整個目錄：名稱唯一且參數有效
    pub fn validate(&self) -> Result<()> {
        for (i, product) in self.products.iter().enumerate() {
            if self.products[..i].iter().any(|p| p.name == product.name) {
                return Err(PlanError::DuplicateProduct(product.name.clone()));
            }
            product.economics.validate().map_err(|e| {
                PlanError::InvalidProductEconomics(format!("{}: {}", product.name, e))
            })?;
        }
        Ok(())
    }

    /// 從 JSON 字串載入目錄
    ///
    /// 格式：`{"products": [{"name": "...", "economics": {"unit_price": ..., "unit_cost": ..., "unit_time_hours": ...}}]}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| PlanError::Config(format!("目錄格式錯誤: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// 從 JSON 檔案載入目錄
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlanError::Config(format!("無法讀取目錄檔 {}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reference_catalog() {
        let catalog = ProductCatalog::reference();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.names(),
            vec!["Sepatu Olahraga", "Sepatu Kasual", "Sepatu Formal"]
        );
        assert!(catalog.validate().is_ok());

        let kasual = catalog.get("Sepatu Kasual").unwrap();
        assert_eq!(kasual.unit_price, Decimal::from(200_000));
        assert_eq!(kasual.unit_time_hours, Decimal::new(10, 2));
    }

    #[test]
    fn test_product_not_found() {
        let catalog = ProductCatalog::reference();
        assert!(matches!(
            catalog.get("Sandal"),
            Err(PlanError::ProductNotFound(name)) if name == "Sandal"
        ));
    }

    #[test]
    fn test_add_product() {
        let economics =
            ProductEconomics::new(Decimal::from(90_000), Decimal::from(60_000), Decimal::new(5, 2))
                .unwrap();

        let mut catalog = ProductCatalog::new()
            .with_product("Sandal", economics)
            .unwrap();
        assert_eq!(catalog.len(), 1);

        // 名稱重複
        assert!(matches!(
            catalog.add_product("Sandal", economics),
            Err(PlanError::DuplicateProduct(_))
        ));

        // 參數無效
        let invalid = ProductEconomics {
            unit_time_hours: Decimal::ZERO,
            ..economics
        };
        assert!(catalog.add_product("Boots", invalid).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "products": [
                {"name": "Sandal", "economics": {"unit_price": 90000, "unit_cost": 60000, "unit_time_hours": "0.05"}},
                {"name": "Boots", "economics": {"unit_price": "400000", "unit_cost": "310000", "unit_time_hours": "1.25"}}
            ]
        }"#;

        let catalog = ProductCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.names(), vec!["Sandal", "Boots"]);
        assert_eq!(
            catalog.get("Boots").unwrap().unit_time_hours,
            Decimal::new(125, 2)
        );
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let malformed = ProductCatalog::from_json_str("{ not json");
        assert!(matches!(malformed, Err(PlanError::Config(_))));

        let zero_time = r#"{"products": [{"name": "X", "economics": {"unit_price": "1", "unit_cost": "1", "unit_time_hours": "0"}}]}"#;
        assert!(matches!(
            ProductCatalog::from_json_str(zero_time),
            Err(PlanError::InvalidProductEconomics(_))
        ));

        let duplicated = r#"{"products": [
            {"name": "X", "economics": {"unit_price": "1", "unit_cost": "1", "unit_time_hours": "1"}},
            {"name": "X", "economics": {"unit_price": "2", "unit_cost": "1", "unit_time_hours": "1"}}
        ]}"#;
        assert!(matches!(
            ProductCatalog::from_json_str(duplicated),
            Err(PlanError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let catalog = ProductCatalog::reference();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes())
            .unwrap();

        let loaded = ProductCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, catalog);

        let missing = ProductCatalog::from_json_file("/nonexistent/catalog.json");
        assert!(matches!(missing, Err(PlanError::Config(_))));
    }
}
