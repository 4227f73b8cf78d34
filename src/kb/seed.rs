/// Built-in entries as `(question, answer, category)`.
pub const SEED_ENTRIES: &[(&str, &str, &str)] = &[
    (
        "How do I reset my password?",
        "Go to Settings > Security and click \"Reset Password\". We'll email you a link that is valid for 24 hours.",
        "Account",
    ),
    (
        "What are your business hours?",
        "Our support team is available Monday to Friday, 9 AM to 6 PM EST.",
        "General",
    ),
    (
        "How can I cancel my subscription?",
        "You can cancel at any time from Settings > Billing > Manage Subscription. Access continues until the end of the current billing period.",
        "Billing",
    ),
    (
        "Do you offer refunds?",
        "Yes. Annual plans can be refunded in full within 30 days of purchase. Contact billing support with your order number.",
        "Billing",
    ),
    (
        "Which payment methods do you accept?",
        "We accept Visa, Mastercard, American Express, and PayPal. Enterprise customers can also pay by invoice.",
        "Billing",
    ),
    (
        "How do I change my email address?",
        "Open Settings > Profile, enter the new address, and confirm it from the verification email we send.",
        "Account",
    ),
    (
        "Why is the app running slowly?",
        "Try clearing your browser cache and disabling extensions. If it is still slow, check our status page for ongoing incidents.",
        "Technical",
    ),
    (
        "Is there an API available?",
        "Yes. API keys can be generated under Settings > Developers. Full documentation is at docs.example.com/api.",
        "Technical",
    ),
    (
        "How do I export my data?",
        "Go to Settings > Data and click \"Export\". You'll receive a download link for a ZIP archive once it is ready.",
        "Technical",
    ),
];
