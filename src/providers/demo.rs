//! Built-in demonstration dataset.

use super::{
    ActivityProvider, CreativeProvider, CustomerProvider, DataSource, DealerProvider,
    ExperimentProvider, MetricsProvider, SegmentProvider, TranscriptProvider,
};
use crate::model::{
    BookingConfirmation, CallScript, CallerProfile, Channel, ChartPoint, Creative, Customer,
    Dealer, Experiment, ExperimentStatus, GeneratorOptions, KpiCard, LeadBucket, LeadTier,
    ProgressStat, Segment, SeriesChart, SeriesRow, Speaker, Stat, TranscriptEntry, Trend,
    Variant,
};

const ACTIVITY_LINES: [&str; 10] = [
    "Analyzing 15,420 customers across all touchpoints...",
    "Identified 4 high-intent micro-segments based on behavior patterns...",
    "Generated 12 creative variants optimized for regional preferences...",
    "Running 3 autonomous A/B tests across digital channels...",
    "Optimizing budget allocation based on real-time performance...",
    "Deploying 2,847 personalized activations via email, SMS, and push...",
    "Predicting next-best actions for 1,240 warm leads...",
    "Voice AI handling 156 concurrent customer conversations...",
    "Routing 89 hot leads to top-performing dealers...",
    "Updating predictive models with latest conversion data...",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn points(items: &[(&str, f64)]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|(label, value)| ChartPoint::new(*label, *value))
        .collect()
}

/// Static fixtures for every page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoData;

impl DemoData {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataSource for DemoData {
    fn name(&self) -> &'static str {
        "demo"
    }
}

impl ActivityProvider for DemoData {
    fn activity_lines(&self) -> Vec<String> {
        strings(&ACTIVITY_LINES)
    }
}

impl SegmentProvider for DemoData {
    fn segments(&self) -> Vec<Segment> {
        let segment = |id, name: &str, count, probability, icon: &str, insights: [&str; 3]| {
            Segment {
                id,
                name: name.to_string(),
                count,
                probability,
                icon: icon.to_string(),
                insights: strings(&insights),
            }
        };
        vec![
            segment(
                1,
                "Urban EV-Curious Tech Professionals",
                2450,
                68,
                "⚡",
                [
                    "High engagement with sustainability content",
                    "Premium income bracket",
                    "Active on digital platforms",
                ],
            ),
            segment(
                2,
                "Price-Sensitive First-Time Car Buyers",
                3120,
                45,
                "🎯",
                [
                    "Frequent loan calculator usage",
                    "High website session time",
                    "Comparing entry-level models",
                ],
            ),
            segment(
                3,
                "Alto Loyalists (Repeat Intent)",
                1890,
                81,
                "❤️",
                [
                    "Previous Alto owners",
                    "High brand loyalty score",
                    "Looking for upgrades",
                ],
            ),
            segment(
                4,
                "S-Cross Defectors (Win-back Required)",
                856,
                32,
                "🔄",
                [
                    "Considering competitor SUVs",
                    "Service satisfaction issues",
                    "Require targeted offers",
                ],
            ),
        ]
    }
}

impl CustomerProvider for DemoData {
    fn customers(&self) -> Vec<Customer> {
        let customer =
            |id, name: &str, car: &str, probability, channel, message: &str, send_time: &str| {
                Customer {
                    id,
                    name: name.to_string(),
                    car: car.to_string(),
                    probability,
                    channel,
                    message: message.to_string(),
                    send_time: send_time.to_string(),
                }
            };
        vec![
            customer(
                1,
                "Rajesh Kumar",
                "Brezza VXI",
                87,
                Channel::WhatsApp,
                "Hi Rajesh! Your favorite Brezza VXI is now available with ₹25,000 cashback. Book a test drive?",
                "2:30 PM Today",
            ),
            customer(
                2,
                "Priya Sharma",
                "Swift ZXI+",
                72,
                Channel::Email,
                "Exclusive offer: Swift ZXI+ with free accessories worth ₹15,000. Limited period only!",
                "4:00 PM Today",
            ),
            customer(
                3,
                "Amit Patel",
                "Grand Vitara Alpha",
                65,
                Channel::Sms,
                "Grand Vitara Alpha - Experience hybrid technology. Test drive slots available this weekend.",
                "10:00 AM Tomorrow",
            ),
            customer(
                4,
                "Sneha Reddy",
                "Baleno Delta",
                91,
                Channel::Phone,
                "Personal call recommended - High intent buyer, ready for immediate purchase",
                "Now",
            ),
        ]
    }
}

impl CreativeProvider for DemoData {
    fn creatives(&self) -> Vec<Creative> {
        let creative = |id,
                        language: &str,
                        headline: &str,
                        body: &str,
                        cta: &str,
                        predicted_ctr,
                        segment: &str| Creative {
            id,
            language: language.to_string(),
            headline: headline.to_string(),
            body: body.to_string(),
            cta: cta.to_string(),
            predicted_ctr,
            segment: segment.to_string(),
        };
        vec![
            creative(
                1,
                "English",
                "Experience Hybrid Power",
                "Grand Vitara - India's favorite SUV now with intelligent hybrid technology. Book your test drive today!",
                "Book Test Drive",
                8.4,
                "Urban EV-Curious",
            ),
            creative(
                2,
                "Hindi",
                "हाइब्रिड पावर का अनुभव करें",
                "ग्रैंड विटारा - भारत की पसंदीदा SUV अब इंटेलिजेंट हाइब्रिड टेक्नोलॉजी के साथ. आज ही टेस्ट ड्राइव बुक करें!",
                "टेस्ट ड्राइव बुक करें",
                9.2,
                "Hindi Belt Users",
            ),
            creative(
                3,
                "Tamil",
                "ஹைப்ரிட் சக்தியை அனுபவிக்கவும்",
                "கிராண்ட் விடாரா - இந்தியாவின் பிடிக்க SUV இன்று சூட்டு சக்தி தகவல் சார்ந்த ஹைப்ரிடுடன்!",
                "சாலனை பரிசோதனை",
                7.8,
                "Tamil Nadu Market",
            ),
        ]
    }

    fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            cars: strings(&["Grand Vitara", "Brezza", "Swift", "Baleno"]),
            languages: strings(&["English", "Hindi", "Tamil", "Telugu"]),
            segments: strings(&["Urban EV-Curious", "First-Time Buyers", "Alto Loyalists"]),
        }
    }
}

impl ExperimentProvider for DemoData {
    fn experiment(&self) -> Experiment {
        Experiment {
            name: "Brezza Campaign - Offer vs Feature Messaging".to_string(),
            status: ExperimentStatus::Running,
            variants: vec![
                Variant {
                    id: "A".to_string(),
                    name: "Offer-Focused".to_string(),
                    description: "₹25,000 cashback + Free accessories".to_string(),
                    engagement: 42,
                    cpl: 298,
                    conversions: 234,
                    confidence: 45,
                },
                Variant {
                    id: "B".to_string(),
                    name: "Feature-Focused".to_string(),
                    description: "Premium SUV features + Safety tech".to_string(),
                    engagement: 67,
                    cpl: 234,
                    conversions: 389,
                    confidence: 89,
                },
            ],
            traffic: points(&[("Variant A", 45.0), ("Variant B", 55.0)]),
            performance: vec![
                SeriesRow::new("Engagement", [42.0, 67.0]),
                SeriesRow::new("CTR", [3.2, 5.8]),
                SeriesRow::new("Conversions", [234.0, 389.0]),
            ],
            note: "Budget automatically shifting to Variant B".to_string(),
        }
    }
}

impl DealerProvider for DemoData {
    fn dealers(&self) -> Vec<Dealer> {
        let dealer = |id, name: &str, location: &str, rating, performance, leads, conversions| {
            Dealer {
                id,
                name: name.to_string(),
                location: location.to_string(),
                rating,
                performance,
                leads_assigned: leads,
                conversions,
            }
        };
        vec![
            dealer(1, "Prestige Motors", "Bangalore - JP Nagar", 4.8, 92, 45, 34),
            dealer(2, "Silver Oak Automobiles", "Bangalore - Koramangala", 4.6, 87, 38, 28),
            dealer(3, "Metro Wheels", "Bangalore - Whitefield", 4.5, 83, 42, 30),
        ]
    }

    fn lead_distribution(&self) -> Vec<LeadBucket> {
        vec![
            LeadBucket {
                tier: LeadTier::Hot,
                value: 340,
            },
            LeadBucket {
                tier: LeadTier::Warm,
                value: 1240,
            },
            LeadBucket {
                tier: LeadTier::Cold,
                value: 2890,
            },
        ]
    }

    fn dealer_performance(&self) -> SeriesChart {
        SeriesChart {
            title: "Top Dealer Performance".to_string(),
            series: strings(&["Conversions", "Revenue (L)"]),
            rows: vec![
                SeriesRow::new("Prestige", [34.0, 89.0]),
                SeriesRow::new("Silver Oak", [28.0, 72.0]),
                SeriesRow::new("Metro", [30.0, 78.0]),
            ],
        }
    }
}

impl TranscriptProvider for DemoData {
    fn call_script(&self) -> CallScript {
        CallScript {
            caller: CallerProfile {
                name: "Rajesh Singh".to_string(),
                phone: "+91 98765 43210".to_string(),
                city: "Bangalore".to_string(),
                lead_score: 87,
                intent: "High".to_string(),
                budget_match: 89,
                timeline: "0-30 days".to_string(),
                insights: strings(&[
                    "Customer shows strong interest in hybrid technology",
                    "Prefers Hindi for communication",
                    "Ready for test drive booking",
                    "Recommend: Follow up with financing options",
                ]),
            },
            transcript: vec![
                TranscriptEntry::new(
                    Speaker::Ai,
                    "नमस्ते राजेश जी, मैं Maruti Suzuki AI Assistant हूं. आपने Grand Vitara में रुचि दिखाई थी?",
                    "10:23",
                ),
                TranscriptEntry::new(
                    Speaker::Customer,
                    "हां जी, मैं hybrid variant के बारे में जानना चाहता हूं.",
                    "10:24",
                ),
                TranscriptEntry::new(
                    Speaker::Ai,
                    "बिल्कुल! Grand Vitara Strong Hybrid 40 km/l तक का mileage देता है. क्या आप test drive book करना चाहेंगे?",
                    "10:24",
                ),
                TranscriptEntry::new(
                    Speaker::Customer,
                    "हां, इस weekend के लिए book कर दें.",
                    "10:25",
                ),
                TranscriptEntry::new(
                    Speaker::Ai,
                    "बहुत अच्छा! मैं Saturday, सुबह 11 बजे के लिए slot book कर देता हूं. आपका nearest showroom JP Nagar में है.",
                    "10:25",
                ),
            ],
            booking: BookingConfirmation {
                title: "Test Drive Booked Successfully!".to_string(),
                slot: "Saturday, 11:00 AM".to_string(),
                location: "JP Nagar Showroom".to_string(),
            },
        }
    }
}

impl MetricsProvider for DemoData {
    fn header_status(&self) -> Vec<Stat> {
        vec![
            Stat::new("Last Sync", "2 min ago"),
            Stat::new("Next Optimization", "15 min"),
            Stat::new("Actions Today", "2,847"),
        ]
    }

    fn dashboard_kpis(&self) -> Vec<KpiCard> {
        vec![
            KpiCard::new("Test Drive Bookings", "+24%", Trend::Up),
            KpiCard::new("Cost Per Lead", "₹234", Trend::Down).with_subtext("33% decrease"),
            KpiCard::new("Campaign Performance", "72%", Trend::Up),
            KpiCard::new("Actions Completed", "2,847", Trend::Neutral).with_subtext("Today"),
        ]
    }

    fn weekly_performance(&self) -> Vec<ChartPoint> {
        points(&[
            ("Mon", 65.0),
            ("Tue", 72.0),
            ("Wed", 68.0),
            ("Thu", 78.0),
            ("Fri", 85.0),
            ("Sat", 82.0),
            ("Sun", 90.0),
        ])
    }

    fn processing_speed(&self) -> Stat {
        Stat::new("Processing Speed", "2,847 actions/hour")
    }

    fn call_stats(&self) -> Vec<Stat> {
        vec![
            Stat::new("Active Calls", "156"),
            Stat::new("Avg Call Duration", "2:34"),
            Stat::new("Bookings Today", "89"),
            Stat::new("Dealer Workload", "-40%"),
        ]
    }

    fn call_performance(&self) -> Vec<ProgressStat> {
        vec![
            ProgressStat::new("Conversion Rate", "57%", 57),
            ProgressStat::new("Customer Satisfaction", "4.8/5", 96),
        ]
    }

    fn roi_kpis(&self) -> Vec<KpiCard> {
        vec![
            KpiCard::new("ROI Improvement", "+89%", Trend::Up),
            KpiCard::new("Cost Per Lead", "₹234", Trend::Down).with_subtext("33% decrease"),
            KpiCard::new("Conversion Rate", "12%", Trend::Up).with_subtext("50% increase"),
            KpiCard::new("Ops Cost Reduction", "-30%", Trend::Down),
        ]
    }

    fn roi_comparison(&self) -> SeriesChart {
        SeriesChart {
            title: "Before vs After LifeBOT Implementation".to_string(),
            series: strings(&["Before", "After"]),
            rows: vec![
                SeriesRow::new("CPL", [350.0, 234.0]),
                SeriesRow::new("Conversion", [8.0, 12.0]),
                SeriesRow::new("Test Drives", [100.0, 124.0]),
                SeriesRow::new("Marketing Ops Cost", [100.0, 70.0]),
            ],
        }
    }

    fn roi_trend(&self) -> SeriesChart {
        let months = [
            ("Jan", 45.0, 680.0),
            ("Feb", 52.0, 740.0),
            ("Mar", 61.0, 820.0),
            ("Apr", 73.0, 910.0),
            ("May", 85.0, 1050.0),
            ("Jun", 89.0, 1180.0),
        ];
        SeriesChart {
            title: "6-Month ROI Growth Trend".to_string(),
            series: strings(&["ROI %", "Conversions"]),
            rows: months
                .iter()
                .map(|(month, roi, conversions)| SeriesRow::new(*month, [*roi, *conversions]))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentSummary;

    #[test]
    fn test_activity_feed_has_ten_lines() {
        assert_eq!(DemoData.activity_lines().len(), 10);
    }

    #[test]
    fn test_segment_summary_figures() {
        let summary = SegmentSummary::from_segments(&DemoData.segments());
        assert_eq!(summary.total_users, 8316);
        assert_eq!(summary.average_probability, 57);
    }

    #[test]
    fn test_experiment_winner_is_variant_b() {
        let experiment = DemoData.experiment();
        assert_eq!(experiment.winner().map(|v| v.id.as_str()), Some("B"));
    }

    #[test]
    fn test_call_script_shape() {
        let script = DemoData.call_script();
        assert_eq!(script.transcript.len(), 5);
        assert_eq!(script.transcript[0].speaker, Speaker::Ai);
        assert_eq!(
            script.booking.description(),
            "Saturday, 11:00 AM at JP Nagar Showroom"
        );
    }

    #[test]
    fn test_customer_initials() {
        let initials: Vec<String> = DemoData.customers().iter().map(Customer::initials).collect();
        assert_eq!(initials, ["RK", "PS", "AP", "SR"]);
    }
}
