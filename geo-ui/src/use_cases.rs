//! The fixed catalogue shown on the Use Cases page.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UseCase {
    pub id: u8,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub application: &'static str,
}

pub static USE_CASES: [UseCase; 8] = [
    UseCase {
        id: 1,
        title: "Land Cover Classification",
        icon: "🌍",
        description: "Analyze and classify land cover types including urban areas, forests, vegetation, and water bodies using satellite imagery.",
        features: [
            "Real-time satellite image analysis",
            "Accurate land cover percentage calculation",
            "Support for multiple satellite sources (Sentinel-2, Dynamic World)",
            "Detailed classification reports",
        ],
        application: "Urban planners, environmental researchers, and government agencies use this to monitor land use changes, plan infrastructure development, and assess environmental impact.",
    },
    UseCase {
        id: 2,
        title: "Physical Feature Detection",
        icon: "🗺️",
        description: "Automatically detect and mark physical features in satellite images including water bodies, vegetation patches, urban areas, and agricultural fields.",
        features: [
            "Water body detection using MNDWI",
            "Vegetation patch identification",
            "Urban area mapping",
            "Agricultural field detection",
        ],
        application: "Useful for disaster management, agricultural monitoring, urban planning, and environmental conservation. Helps identify critical infrastructure and natural resources.",
    },
    UseCase {
        id: 3,
        title: "Crop Suitability Analysis",
        icon: "🌾",
        description: "Get AI-powered crop recommendations based on regional climate, soil conditions, and land cover analysis using Google Gemini API.",
        features: [
            "AI-powered crop recommendations",
            "Climate-based suitability scoring",
            "Season-specific growing advice",
            "Yield potential estimation",
        ],
        application: "Farmers and agricultural consultants can use this to make informed decisions about crop selection, optimize agricultural productivity, and plan seasonal farming activities.",
    },
    UseCase {
        id: 4,
        title: "Urbanisation Risk Assessment",
        icon: "🏙️",
        description: "Calculate Urbanisation Risk Score (URS) to assess the impact of urban development on natural resources and infrastructure.",
        features: [
            "Comprehensive URS calculation",
            "Risk level classification (Low, Moderate, High, Critical)",
            "Population density analysis",
            "Infrastructure stress assessment",
        ],
        application: "City planners, policy makers, and environmental agencies use this to evaluate urban sprawl, plan sustainable development, and mitigate environmental risks.",
    },
    UseCase {
        id: 5,
        title: "Climate Risk Assessment",
        icon: "🌡️",
        description: "Assess climate-related risks including flood, heat, and drought risks based on weather data and land cover characteristics.",
        features: [
            "Flood risk assessment",
            "Heat island effect analysis",
            "Drought vulnerability evaluation",
            "Weather alert integration",
        ],
        application: "Emergency management teams, insurance companies, and urban planners use this to prepare for climate events, assess vulnerability, and develop mitigation strategies.",
    },
    UseCase {
        id: 6,
        title: "Air Quality Monitoring",
        icon: "🌬️",
        description: "Monitor air quality indicators including PM2.5, PM10, NO₂, SO₂, CO, and O₃ with health advisories and US AQI standards.",
        features: [
            "Real-time air quality data",
            "US EPA AQI standards",
            "Health advisory recommendations",
            "Pollutant breakdown analysis",
        ],
        application: "Public health officials, environmental agencies, and citizens use this to monitor air pollution levels, make health decisions, and track environmental quality trends.",
    },
    UseCase {
        id: 7,
        title: "Disaster Management",
        icon: "🚨",
        description: "Track natural disasters and weather alerts in real-time to support emergency response and disaster preparedness.",
        features: [
            "Real-time disaster alerts",
            "Weather warning system",
            "Distance-based risk assessment",
            "Severity classification",
        ],
        application: "Emergency response teams, disaster management agencies, and local governments use this to coordinate responses, issue warnings, and protect communities.",
    },
    UseCase {
        id: 8,
        title: "Environmental Monitoring",
        icon: "🌿",
        description: "Monitor environmental changes over time including deforestation, water body changes, and vegetation health.",
        features: [
            "Time-series analysis",
            "Change detection",
            "Vegetation health monitoring",
            "Water resource tracking",
        ],
        application: "Conservation organizations, environmental researchers, and government agencies use this to track ecosystem health, monitor conservation efforts, and enforce environmental regulations.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        assert_eq!(USE_CASES.len(), 8);
        assert_eq!(USE_CASES[0].title, "Land Cover Classification");
        assert_eq!(USE_CASES[7].title, "Environmental Monitoring");
        for (i, case) in USE_CASES.iter().enumerate() {
            assert_eq!(case.id as usize, i + 1);
            assert!(case.features.iter().all(|f| !f.is_empty()));
        }
    }
}
