#![allow(dead_code)]

pub mod mock_catalog;

pub const ONE_PRODUCT: &str = r#"{"products":[{"id":1,"title":"A","price":9.99,"stock":3,"brand":"B","category":"C","rating":4.5,"discountPercentage":10,"thumbnail":"http://x/y.png"}],"total":1,"skip":0,"limit":30}"#;

pub const PRODUCT_ONE: &str = r#"{"id":1,"title":"A","description":"An item","price":9.99,"stock":3,"brand":"B","category":"C","rating":4.5,"discountPercentage":10,"thumbnail":"http://x/y.png","images":["http://x/1.png"],"tags":["misc"]}"#;
