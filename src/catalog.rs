//! Sample data shown by the demo sections.
//!
//! Every section renders literal records; nothing here is fetched or persisted.

use crate::models::*;

/// Marketplace category filters, `all` first
pub fn categories() -> &'static [&'static str] {
    &["all", "vegetables", "fruits", "grains", "dairy", "organic"]
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Organic Tomatoes", "vegetables", 3.50, "lb", "Green Valley Farm", "California", 4.8, 450, Grade::APlus, true),
        product(2, "Premium Apples", "fruits", 2.80, "lb", "Orchard Hills", "Washington", 4.9, 650, Grade::A, true),
        product(3, "Wheat Grain", "grains", 0.45, "lb", "Plains Harvest", "Kansas", 4.7, 12000, Grade::A, false),
        product(4, "Fresh Spinach", "vegetables", 4.20, "lb", "Leafy Greens Co.", "Arizona", 4.6, 320, Grade::APlus, false),
        product(5, "Organic Strawberries", "fruits", 5.50, "lb", "Berry Best Farm", "Oregon", 5.0, 180, Grade::APlus, true),
        product(6, "Raw Honey", "organic", 12.00, "jar", "Bee Happy Farms", "Vermont", 4.9, 95, Grade::APlus, false),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    price: f64,
    unit: &str,
    seller: &str,
    location: &str,
    rating: f32,
    stock: u32,
    grade: Grade,
    trending: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        unit: unit.to_string(),
        seller: seller.to_string(),
        location: location.to_string(),
        rating,
        stock,
        grade,
        trending,
    }
}

pub fn marketplace_stats() -> Vec<StatCard> {
    vec![
        StatCard::plain("Active Listings", "1,247"),
        StatCard::plain("Verified Sellers", "582"),
        StatCard::plain("Daily Volume", "$2.4M"),
        StatCard::plain("Success Rate", "98.5%"),
    ]
}

pub fn routes() -> Vec<Route> {
    vec![
        Route {
            id: 1,
            name: "Route A - Downtown Loop",
            distance: "47.3 mi",
            duration: "1h 23m",
            fuel: "$12.40",
            efficiency: 95,
            traffic: "light",
            weather: "clear",
            stops: 5,
            status: RouteStatus::Optimal,
            savings: "$8.20",
            coordinates: vec![
                (40.7589, -73.9851),
                (40.7614, -73.9776),
                (40.7489, -73.9680),
                (40.7367, -73.9812),
                (40.7489, -73.9897),
                (40.7589, -73.9851),
            ],
            color: Rgb(0x10, 0xb9, 0x81),
        },
        Route {
            id: 2,
            name: "Route B - Highway Express",
            distance: "52.1 mi",
            duration: "1h 15m",
            fuel: "$14.80",
            efficiency: 88,
            traffic: "moderate",
            weather: "clear",
            stops: 3,
            status: RouteStatus::Good,
            savings: "$4.50",
            coordinates: vec![
                (40.7589, -73.9851),
                (40.7800, -73.9600),
                (40.7300, -73.9400),
                (40.7589, -73.9851),
            ],
            color: Rgb(0x3b, 0x82, 0xf6),
        },
        Route {
            id: 3,
            name: "Route C - Scenic Route",
            distance: "61.5 mi",
            duration: "1h 45m",
            fuel: "$17.20",
            efficiency: 72,
            traffic: "heavy",
            weather: "rain",
            stops: 7,
            status: RouteStatus::NotRecommended,
            savings: "$0.00",
            coordinates: vec![
                (40.7589, -73.9851),
                (40.7700, -74.0000),
                (40.7400, -74.0100),
                (40.7200, -73.9950),
                (40.7100, -73.9700),
                (40.7300, -73.9500),
                (40.7500, -73.9600),
                (40.7589, -73.9851),
            ],
            color: Rgb(0xef, 0x44, 0x44),
        },
    ]
}

/// Starting point shared by every route
pub fn distribution_center() -> Marker {
    Marker {
        position: (40.7589, -73.9851),
        title: "Distribution Center",
        subtitle: "Starting Point",
    }
}

pub fn deliveries() -> Vec<Delivery> {
    vec![
        Delivery { id: "D-1047", driver: "John Smith", status: DeliveryStatus::InTransit, progress: 65, eta: "14 min", location: "Highway 101" },
        Delivery { id: "D-1048", driver: "Sarah Jones", status: DeliveryStatus::Loading, progress: 15, eta: "52 min", location: "Distribution Center" },
        Delivery { id: "D-1049", driver: "Mike Chen", status: DeliveryStatus::Delivered, progress: 100, eta: "Completed", location: "Downtown Market" },
        Delivery { id: "D-1050", driver: "Emma Wilson", status: DeliveryStatus::InTransit, progress: 82, eta: "8 min", location: "Main St" },
    ]
}

pub fn logistics_alerts() -> Vec<Alert> {
    vec![
        Alert { message: "Light rain expected in 45 minutes on Route C", time: None, severity: Severity::Medium },
        Alert { message: "Traffic cleared on Highway 101", time: None, severity: Severity::Low },
    ]
}

pub fn logistics_stats() -> Vec<StatCard> {
    vec![
        StatCard::plain("Active Deliveries", "24"),
        StatCard::plain("Total Distance", "573 mi"),
        StatCard::plain("Fuel Saved Today", "$284"),
        StatCard::plain("Time Saved", "3.2h"),
    ]
}

pub fn farms() -> Vec<Farm> {
    vec![
        Farm { id: "farm-1", name: "North Valley Farm", location: "California" },
        Farm { id: "farm-2", name: "Green Acres", location: "Oregon" },
        Farm { id: "farm-3", name: "Sunset Fields", location: "Washington" },
    ]
}

pub fn current_weather() -> CurrentWeather {
    CurrentWeather {
        temp: 72,
        condition: "Partly Cloudy",
        humidity: 65,
        wind_speed: 12,
        precipitation: 20,
        uv_index: 6,
    }
}

pub fn hourly_forecast() -> Vec<HourlyForecast> {
    vec![
        HourlyForecast { time: "6 AM", temp: 58, rain: 0 },
        HourlyForecast { time: "9 AM", temp: 64, rain: 5 },
        HourlyForecast { time: "12 PM", temp: 72, rain: 20 },
        HourlyForecast { time: "3 PM", temp: 75, rain: 35 },
        HourlyForecast { time: "6 PM", temp: 70, rain: 15 },
        HourlyForecast { time: "9 PM", temp: 62, rain: 5 },
    ]
}

pub fn weekly_forecast() -> Vec<DailyForecast> {
    vec![
        DailyForecast { day: "Mon", high: 75, low: 58, rain: 20, sky: Sky::Sun },
        DailyForecast { day: "Tue", high: 73, low: 60, rain: 35, sky: Sky::CloudRain },
        DailyForecast { day: "Wed", high: 70, low: 58, rain: 60, sky: Sky::CloudRain },
        DailyForecast { day: "Thu", high: 72, low: 59, rain: 40, sky: Sky::Cloud },
        DailyForecast { day: "Fri", high: 76, low: 61, rain: 15, sky: Sky::Sun },
        DailyForecast { day: "Sat", high: 78, low: 62, rain: 10, sky: Sky::Sun },
        DailyForecast { day: "Sun", high: 77, low: 63, rain: 20, sky: Sky::Cloud },
    ]
}

pub fn soil_moisture() -> Vec<SoilReading> {
    vec![
        SoilReading { hour: "00:00", moisture: 45 },
        SoilReading { hour: "04:00", moisture: 43 },
        SoilReading { hour: "08:00", moisture: 48 },
        SoilReading { hour: "12:00", moisture: 52 },
        SoilReading { hour: "16:00", moisture: 55 },
        SoilReading { hour: "20:00", moisture: 50 },
        SoilReading { hour: "24:00", moisture: 47 },
    ]
}

pub fn weather_alerts() -> Vec<Alert> {
    vec![
        Alert { message: "Heavy rain expected tomorrow afternoon", time: Some("2h ago"), severity: Severity::High },
        Alert { message: "Optimal irrigation window: 6 PM - 8 PM", time: Some("4h ago"), severity: Severity::Low },
        Alert { message: "Frost risk detected for Thursday night", time: Some("6h ago"), severity: Severity::Medium },
    ]
}

pub fn weather_recommendations() -> &'static [&'static str] {
    &[
        "Delay harvesting by 2 days due to upcoming rain",
        "Increase irrigation tonight before temperature rise",
        "Apply frost protection measures for Thursday",
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "AI Quality Assessment",
            description: "Instant crop grading using advanced computer vision. Upload photos for real-time quality analysis and market value estimation.",
            target: Section::Quality,
        },
        Feature {
            title: "Live Marketplace",
            description: "Buy and sell produce directly with verified sellers. Real-time pricing, instant transactions, and quality-verified products.",
            target: Section::Marketplace,
        },
        Feature {
            title: "Smart Logistics",
            description: "AI-powered route optimization with real-time traffic analysis, weather monitoring, and fuel efficiency calculations.",
            target: Section::Logistics,
        },
        Feature {
            title: "Weather Intelligence",
            description: "Hyper-local forecasts, climate pattern analysis, and automated alerts to protect your crops and maximize yields.",
            target: Section::Weather,
        },
        Feature {
            title: "Analytics Dashboard",
            description: "Comprehensive insights on crop performance, market trends, revenue tracking, and financial metrics in one place.",
            target: Section::Dashboard,
        },
        Feature {
            title: "Automated Workflows",
            description: "Set up intelligent triggers and automations for harvesting schedules, pricing updates, and delivery coordination.",
            target: Section::Dashboard,
        },
    ]
}

/// Three highlight tiles under the hero banner
pub fn hero_highlights() -> Vec<StatCard> {
    vec![
        StatCard::plain("98% Accuracy", "AI crop quality assessment"),
        StatCard::plain("Real-Time", "Live weather & market data"),
        StatCard::plain("Smart Routes", "AI-optimized logistics"),
    ]
}

pub fn quality_stats() -> Vec<StatCard> {
    vec![
        StatCard::plain("Accuracy Rate", "98%"),
        StatCard::plain("Analysis Time", "<2s"),
        StatCard::plain("Crops Analyzed", "12K+"),
        StatCard::plain("Crop Types", "50+"),
    ]
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Revenue", value: "$346,000", change: Some("+12.5%"), trend: Trend::Up },
        StatCard { label: "Crop Yield", value: "8,480 lbs", change: Some("+8.2%"), trend: Trend::Up },
        StatCard { label: "Active Deliveries", value: "24", change: Some("-2"), trend: Trend::Down },
        StatCard { label: "Quality Score", value: "96%", change: Some("+3.1%"), trend: Trend::Up },
    ]
}

pub fn monthly_revenue() -> Vec<MonthlyRevenue> {
    vec![
        MonthlyRevenue { month: "Jan", revenue: 45000, costs: 28000 },
        MonthlyRevenue { month: "Feb", revenue: 52000, costs: 31000 },
        MonthlyRevenue { month: "Mar", revenue: 48000, costs: 29000 },
        MonthlyRevenue { month: "Apr", revenue: 61000, costs: 35000 },
        MonthlyRevenue { month: "May", revenue: 72000, costs: 42000 },
        MonthlyRevenue { month: "Jun", revenue: 68000, costs: 38000 },
    ]
}

pub fn crop_distribution() -> Vec<CropShare> {
    vec![
        CropShare { name: "Tomatoes", value: 35, color: Rgb(0xef, 0x44, 0x44) },
        CropShare { name: "Lettuce", value: 25, color: Rgb(0x10, 0xb9, 0x81) },
        CropShare { name: "Carrots", value: 20, color: Rgb(0xf9, 0x73, 0x16) },
        CropShare { name: "Peppers", value: 12, color: Rgb(0xea, 0xb3, 0x08) },
        CropShare { name: "Other", value: 8, color: Rgb(0x6b, 0x72, 0x80) },
    ]
}

pub fn yield_data() -> Vec<YieldPoint> {
    vec![
        YieldPoint { week: "W1", actual: 1200, predicted: 1150 },
        YieldPoint { week: "W2", actual: 1350, predicted: 1300 },
        YieldPoint { week: "W3", actual: 1280, predicted: 1320 },
        YieldPoint { week: "W4", actual: 1420, predicted: 1400 },
        YieldPoint { week: "W5", actual: 1580, predicted: 1550 },
        YieldPoint { week: "W6", actual: 1650, predicted: 1620 },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity { message: "Sold 450 lbs of Organic Tomatoes", time: "2 hours ago", status: ActivityStatus::Success },
        Activity { message: "Harvested Field C - Lettuce", time: "5 hours ago", status: ActivityStatus::Success },
        Activity { message: "Weather alert: Rain expected tomorrow", time: "8 hours ago", status: ActivityStatus::Warning },
        Activity { message: "Delivery D-1047 completed", time: "12 hours ago", status: ActivityStatus::Success },
    ]
}
