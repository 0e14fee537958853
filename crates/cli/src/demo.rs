//! Sample dashboards with the figures of the sales and procurement views.

use dashchart_chart::Color;
use dashchart_chart::DataPoint;
use dashchart_chart::format::ValueFormat;
use dashchart_chart::pie::default_palette;
use dashchart_vis::layout::Align;
use dashchart_vis::layout::Column;
use dashchart_vis::layout::Impact;
use dashchart_vis::layout::InsightKind;
use dashchart_vis::layout::Trend;

use crate::cli::Dashboard;
use crate::dashboard::ChartConfig;
use crate::dashboard::DashboardConfig;
use crate::dashboard::InsightConfig;
use crate::dashboard::KpiConfig;
use crate::dashboard::SectionConfig;
use crate::dashboard::TableConfig;

const BLUE: &str = "#2563eb";

const REVENUE: [(&str, f64); 6] = [
    ("Jan", 671000.0),
    ("Feb", 589000.0),
    ("Mar", 723000.0),
    ("Apr", 856000.0),
    ("May", 945000.0),
    ("Jun", 1120000.0),
];

const SPEND_BY_CATEGORY: [(&str, f64); 5] = [
    ("Hardware", 245000.0),
    ("Software", 189000.0),
    ("Services", 156000.0),
    ("Office Materials", 89000.0),
    ("Manufacturing", 334000.0),
];

const SALES_BY_REGION: [(&str, f64); 3] = [
    ("North America", 45.0),
    ("Europe", 32.0),
    ("Asia Pacific", 23.0),
];

const SALES_KPIS: [(&str, &str, f64, Trend); 4] = [
    ("Total Revenue", "$671K", 12.5, Trend::Up),
    ("Conversion Rate", "26.4%", 3.2, Trend::Up),
    ("Active Leads", "243", -2.1, Trend::Down),
    ("Avg Deal Size", "$13.4K", 8.7, Trend::Up),
];

const PROCUREMENT_KPIS: [(&str, &str, f64, Trend); 4] = [
    ("Total Spend", "$380K", 5.3, Trend::Up),
    ("Supplier Performance", "94.2%", 2.1, Trend::Up),
    ("Cost Savings", "$45K", 15.8, Trend::Up),
    ("Risk Score", "2.4", -0.3, Trend::Up),
];

const INSIGHTS: [(InsightKind, &str, &str, u8, Impact, &str); 4] = [
    (
        InsightKind::Forecast,
        "Q1 Revenue Forecast",
        "Based on current trends, Q1 revenue is projected to reach $2.1M, exceeding target by 8%",
        87,
        Impact::High,
        "2024-01-19",
    ),
    (
        InsightKind::Anomaly,
        "Unusual Spending Pattern",
        "Hardware procurement spend increased 35% this week, investigate potential bulk orders",
        92,
        Impact::Medium,
        "2024-01-19",
    ),
    (
        InsightKind::Recommendation,
        "Supplier Consolidation",
        "Consolidating office supplies to 2 suppliers could save $12K annually",
        78,
        Impact::Medium,
        "2024-01-18",
    ),
    (
        InsightKind::Trend,
        "Mobile Solutions Growth",
        "Mobile product sales up 45% month-over-month, consider expanding team",
        85,
        Impact::High,
        "2024-01-17",
    ),
];

// Date, sales person, product, region, revenue, conversions.
const RECENT_SALES: [(&str, &str, &str, &str, f64, u32); 5] = [
    ("2024-01-15", "John Smith", "Enterprise Software", "North America", 125000.0, 12),
    ("2024-01-16", "Sarah Johnson", "Cloud Services", "Europe", 98000.0, 9),
    ("2024-01-17", "Mike Chen", "Mobile Solutions", "Asia Pacific", 156000.0, 15),
    ("2024-01-18", "Emily Davis", "Analytics Platform", "North America", 89000.0, 8),
    ("2024-01-19", "David Wilson", "Enterprise Software", "Europe", 203000.0, 18),
];

// Date, supplier, category, amount, status, risk score, delivery date.
const RECENT_PROCUREMENT: [(&str, &str, &str, f64, &str, u8, &str); 5] = [
    ("2024-01-15", "TechCorp Industries", "Hardware", 45000.0, "delivered", 2, "2024-01-20"),
    ("2024-01-16", "Global Software Solutions", "Software", 78000.0, "approved", 1, "2024-01-25"),
    ("2024-01-17", "Office Supplies Plus", "Office Materials", 12000.0, "pending", 3, "2024-01-22"),
    (
        "2024-01-18",
        "Industrial Components Ltd",
        "Manufacturing",
        156000.0,
        "delivered",
        4,
        "2024-01-19",
    ),
    ("2024-01-19", "Cloud Infrastructure Co", "Services", 89000.0, "approved", 2, "2024-01-30"),
];

pub(crate) fn dashboard(kind: Dashboard) -> DashboardConfig {
    match kind {
        Dashboard::Overview => overview(),
        Dashboard::Sales => sales(),
        Dashboard::Procurement => procurement(),
    }
}

fn overview() -> DashboardConfig {
    DashboardConfig {
        title: String::from("Executive Overview"),
        sections: vec![
            SectionConfig {
                title: Some(String::from("Sales")),
                kpis: kpis(&SALES_KPIS),
                ..Default::default()
            },
            SectionConfig {
                title: Some(String::from("Procurement")),
                kpis: kpis(&PROCUREMENT_KPIS),
                ..Default::default()
            },
            SectionConfig {
                title: Some(String::from("AI-Powered Insights")),
                insights: insights(),
                ..Default::default()
            },
            SectionConfig {
                title: Some(String::from("Performance")),
                charts: vec![revenue("Revenue Performance")],
                ..Default::default()
            },
        ],
    }
}

fn sales() -> DashboardConfig {
    DashboardConfig {
        title: String::from("Sales Dashboard"),
        sections: vec![
            SectionConfig {
                kpis: kpis(&SALES_KPIS),
                ..Default::default()
            },
            SectionConfig {
                charts: vec![
                    revenue("Revenue Trend"),
                    ChartConfig::Pie {
                        title: String::from("Sales by Region"),
                        colors: default_palette().into_iter().take(3).collect(),
                        value_prefix: String::new(),
                        value_suffix: String::from("%"),
                        data: points(&SALES_BY_REGION),
                    },
                ],
                ..Default::default()
            },
            SectionConfig {
                tables: vec![recent_sales()],
                ..Default::default()
            },
        ],
    }
}

fn procurement() -> DashboardConfig {
    DashboardConfig {
        title: String::from("Procurement Dashboard"),
        sections: vec![
            SectionConfig {
                kpis: kpis(&PROCUREMENT_KPIS),
                ..Default::default()
            },
            SectionConfig {
                charts: vec![ChartConfig::Pie {
                    title: String::from("Spend by Category"),
                    colors: default_palette(),
                    value_prefix: String::from("$"),
                    value_suffix: String::new(),
                    data: points(&SPEND_BY_CATEGORY),
                }],
                ..Default::default()
            },
            SectionConfig {
                tables: vec![recent_procurement()],
                ..Default::default()
            },
        ],
    }
}

fn revenue(title: &str) -> ChartConfig {
    ChartConfig::Line {
        title: title.to_owned(),
        color: Some(Color::from(BLUE)),
        data: points(&REVENUE),
    }
}

fn insights() -> Vec<InsightConfig> {
    INSIGHTS
        .iter()
        .map(
            |&(kind, title, description, confidence, impact, date)| InsightConfig {
                kind,
                title: title.to_owned(),
                description: description.to_owned(),
                confidence,
                impact,
                date: date.to_owned(),
            },
        )
        .collect()
}

fn recent_sales() -> TableConfig {
    let revenue = ValueFormat::currency("$");

    TableConfig {
        title: String::from("Recent Sales"),
        columns: vec![
            Column::new("Date", Align::Left),
            Column::new("Sales Person", Align::Left),
            Column::new("Product", Align::Left),
            Column::new("Region", Align::Left),
            Column::new("Revenue", Align::Right),
            Column::new("Conversions", Align::Right),
        ],
        rows: RECENT_SALES
            .iter()
            .map(|&(date, person, product, region, amount, conversions)| {
                vec![
                    date.to_owned(),
                    person.to_owned(),
                    product.to_owned(),
                    region.to_owned(),
                    revenue.format(amount),
                    conversions.to_string(),
                ]
            })
            .collect(),
    }
}

fn recent_procurement() -> TableConfig {
    let amount_format = ValueFormat::currency("$");

    TableConfig {
        title: String::from("Recent Procurement"),
        columns: vec![
            Column::new("Date", Align::Left),
            Column::new("Supplier", Align::Left),
            Column::new("Category", Align::Left),
            Column::new("Amount", Align::Right),
            Column::new("Status", Align::Center),
            Column::new("Risk", Align::Center),
            Column::new("Delivery", Align::Left),
        ],
        rows: RECENT_PROCUREMENT
            .iter()
            .map(|&(date, supplier, category, amount, status, risk, delivery)| {
                vec![
                    date.to_owned(),
                    supplier.to_owned(),
                    category.to_owned(),
                    amount_format.format(amount),
                    status.to_owned(),
                    format!("{risk}/5"),
                    delivery.to_owned(),
                ]
            })
            .collect(),
    }
}

fn points(values: &[(&str, f64)]) -> Vec<DataPoint> {
    values
        .iter()
        .map(|&(label, value)| DataPoint::new(label, value))
        .collect()
}

fn kpis(values: &[(&str, &str, f64, Trend)]) -> Vec<KpiConfig> {
    values
        .iter()
        .map(|&(title, value, change, trend)| KpiConfig {
            title: title.to_owned(),
            value: value.to_owned(),
            change,
            trend,
        })
        .collect()
}
