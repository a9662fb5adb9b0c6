use serde::Deserialize;

// roomDetail
//  ├── room
//  │    ├── id
//  │    ├── title
//  │    ├── room_type_str
//  │    ├── maintenance_cost
//  │    ├── room_floor_str
//  │    ├── room_size
//  │    ├── memo
//  │    └── img_urls
//  ├── price
//  │    ├── deposit
//  │    └── monthly_fee
//  └── address
//       └── full_text

#[derive(Debug, Deserialize)]
pub struct DabangRoomDetail {
    pub room: Option<DabangRoom>,
    pub price: Option<DabangPrice>,
    pub address: Option<DabangAddress>,
}

#[derive(Debug, Deserialize)]
pub struct DabangRoom {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "room_type_str")]
    pub room_type: Option<String>,
    #[serde(rename = "maintenance_cost")]
    pub maintenance_cost: Option<i64>,
    #[serde(rename = "room_floor_str")]
    pub floor: Option<String>,
    #[serde(rename = "room_size")]
    pub room_size: Option<f64>,
    pub memo: Option<String>,
    #[serde(rename = "img_urls", default)]
    pub img_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DabangPrice {
    pub deposit: Option<i64>,
    #[serde(rename = "monthly_fee")]
    pub monthly_fee: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DabangAddress {
    #[serde(rename = "full_text")]
    pub full_text: Option<String>,
}
