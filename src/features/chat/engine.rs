//! Keyword-matched response engine for the asthma assistant.
//!
//! Matching is an ordered rule table: the message is lowercased and the first
//! rule with a contained keyword wins. The final fallback has no keywords and
//! always matches.

/// One entry in the response table
struct Rule {
    keywords: &'static [&'static str],
    response: &'static str,
}

const GREETING_RESPONSE: &str = "Hello! 👋 I'm your AsthmaCare AI assistant. I'm here to help you with asthma-related questions including symptoms, triggers, medications, air quality, and emergency care. What would you like to know about managing your asthma today?";

const SYMPTOMS_RESPONSE: &str = "Common asthma symptoms include:\n\n• **Wheezing** - a whistling sound when breathing\n• **Shortness of breath** - especially during activities\n• **Chest tightness** - feeling like a band around your chest\n• **Coughing** - often worse at night or early morning\n• **Difficulty sleeping** due to breathing problems\n\nIf you experience severe symptoms like difficulty speaking, blue lips, or extreme shortness of breath, seek immediate medical attention! 🚨";

const TRIGGERS_RESPONSE: &str = "Common asthma triggers include:\n\n**Environmental:**\n• Air pollution and smog\n• Dust mites and allergens\n• Pet dander\n• Pollen (seasonal)\n• Cold air\n\n**Lifestyle:**\n• Smoke (cigarettes, cooking)\n• Strong scents/perfumes\n• Exercise (exercise-induced asthma)\n• Stress and strong emotions\n• Respiratory infections\n\n💡 **Tip:** Keep an asthma diary to identify your personal triggers!";

const MEDICATION_RESPONSE: &str = "Asthma medications fall into two main categories:\n\n**Quick-Relief (Rescue) Inhalers:**\n• Albuterol (ProAir, Ventolin)\n• Used during asthma attacks\n• Should provide relief within 15 minutes\n\n**Long-Term Control:**\n• Inhaled corticosteroids (Flovent, Pulmicort)\n• Combination inhalers (Advair, Symbicort)\n• Taken daily to prevent symptoms\n\n⚠️ **Important:** Always follow your doctor's prescribed treatment plan and never stop medications without consulting them!";

const EMERGENCY_RESPONSE: &str = "**Seek immediate emergency care if you experience:**\n\n🚨 **Severe symptoms:**\n• Cannot speak in full sentences\n• Lips or fingernails turn blue\n• Extreme difficulty breathing\n• Rescue inhaler doesn't help\n• Peak flow drops below 50% of personal best\n\n**Emergency Action:**\n1. Use rescue inhaler immediately\n2. Call 911 or go to ER\n3. Take rescue inhaler every 20 minutes\n4. Stay calm and sit upright\n\n**Always have an Asthma Action Plan with emergency contacts!**";

const AIR_QUALITY_RESPONSE: &str = "Air quality significantly impacts asthma:\n\n**Daily Monitoring:**\n• Check AQI (Air Quality Index) daily\n• AQI > 100: Limit outdoor activities\n• AQI > 150: Stay indoors if possible\n\n**Indoor Air Quality:**\n• Use HEPA air purifiers\n• Keep humidity 30-50%\n• Regular cleaning to reduce dust\n• Avoid smoking indoors\n\n**Seasonal Considerations:**\n• High pollen days: Keep windows closed\n• Winter: Warm up gradually before going out\n• Monsoon: Watch for mold growth\n\n🌬️ Our air quality checker can help you plan your activities!";

const EXERCISE_RESPONSE: &str = "Exercise is beneficial for asthma when managed properly:\n\n**Safe Exercise Tips:**\n• Use pre-exercise inhaler if prescribed\n• Warm up for 10-15 minutes gradually\n• Choose asthma-friendly activities (swimming, walking)\n• Exercise indoors during high pollution days\n• Cool down slowly\n\n**Warning Signs to Stop:**\n• Wheezing or coughing\n• Chest tightness\n• Shortness of breath beyond normal exertion\n• Dizziness or fatigue\n\n🏃‍♂️ **Remember:** Exercise-induced asthma is manageable - don't avoid physical activity entirely!";

const DIET_RESPONSE: &str = "While no diet cures asthma, certain foods may help:\n\n**Beneficial Foods:**\n• **Omega-3 rich** - fish, walnuts, flax seeds\n• **Antioxidants** - berries, leafy greens, tomatoes\n• **Magnesium** - spinach, almonds, dark chocolate\n• **Vitamin D** - fortified foods, sunlight exposure\n\n**Foods to Limit:**\n• Processed foods high in preservatives\n• Sulfites (wine, dried fruits)\n• Foods you're allergic to\n• Excess salt\n\n🥗 **Tip:** Maintain a healthy weight as obesity can worsen asthma symptoms.";

const STRESS_RESPONSE: &str = "Stress and emotions can trigger asthma:\n\n**Stress Management:**\n• Practice deep breathing exercises\n• Try meditation or yoga\n• Regular sleep schedule (7-9 hours)\n• Stay connected with support system\n\n**Breathing Techniques:**\n• **4-7-8 Breathing:** Inhale 4, hold 7, exhale 8\n• **Diaphragmatic breathing** for relaxation\n• **Pursed lip breathing** during mild symptoms\n\n🧘‍♀️ **Remember:** Mental health affects physical health - consider counseling if stress is overwhelming.";

const PEAK_FLOW_RESPONSE: &str = "Peak Flow Meters help monitor asthma control:\n\n**How to Use:**\n1. Stand up straight\n2. Take deep breath\n3. Seal lips around mouthpiece\n4. Blow out as hard and fast as possible\n5. Record best of 3 attempts\n\n**Zone System:**\n• **Green (80-100%):** Good control\n• **Yellow (50-79%):** Caution - follow action plan\n• **Red (<50%):** Medical alert - seek help\n\n📊 **Best practice:** Monitor daily and share results with your doctor.";

const TRAVEL_RESPONSE: &str = "Traveling with asthma requires preparation:\n\n**Before Travel:**\n• Pack extra medications\n• Get travel insurance\n• Research local healthcare\n• Check air quality at destination\n\n**Flying Tips:**\n• Carry inhalers in carry-on\n• Inform airline of medical needs\n• Stay hydrated\n• Move around during long flights\n\n✈️ **Always bring a letter from your doctor about your medications and medical devices.**";

const FALLBACK_RESPONSE: &str = "I'm here to help with asthma-related questions! Here are some topics I can assist with:\n\n🔹 **Symptoms & Triggers** - Understanding what causes your asthma\n🔹 **Medications** - Information about inhalers and treatments  \n🔹 **Air Quality** - How pollution affects your breathing\n🔹 **Exercise** - Safe physical activity with asthma\n🔹 **Emergency Care** - When and how to seek immediate help\n🔹 **Lifestyle** - Diet, stress management, and daily care\n\nYou can ask me something like:\n• \"What are common asthma triggers?\"\n• \"How do I use my inhaler properly?\"\n• \"What should I do during an asthma attack?\"\n\n**Remember:** This is educational information only. Always consult your healthcare provider for personalized medical advice! 👩‍⚕️";

/// Rule table in priority order; first match wins
const RULES: &[Rule] = &[
    Rule {
        keywords: &["hello", "hi", "hey"],
        response: GREETING_RESPONSE,
    },
    Rule {
        keywords: &["symptom", "wheezing", "cough"],
        response: SYMPTOMS_RESPONSE,
    },
    Rule {
        keywords: &["trigger", "cause", "avoid"],
        response: TRIGGERS_RESPONSE,
    },
    Rule {
        keywords: &["medication", "inhaler", "treatment"],
        response: MEDICATION_RESPONSE,
    },
    Rule {
        keywords: &["emergency", "attack", "severe"],
        response: EMERGENCY_RESPONSE,
    },
    Rule {
        keywords: &["air quality", "pollution", "aqi"],
        response: AIR_QUALITY_RESPONSE,
    },
    Rule {
        keywords: &["exercise", "workout", "physical activity"],
        response: EXERCISE_RESPONSE,
    },
    Rule {
        keywords: &["diet", "food", "nutrition"],
        response: DIET_RESPONSE,
    },
    Rule {
        keywords: &["stress", "anxiety", "breathing technique"],
        response: STRESS_RESPONSE,
    },
    Rule {
        keywords: &["peak flow", "monitor", "measure"],
        response: PEAK_FLOW_RESPONSE,
    },
    Rule {
        keywords: &["travel", "trip", "vacation"],
        response: TRAVEL_RESPONSE,
    },
];

/// Produce the canned response for a user message.
///
/// Pure function of the message: case-insensitive substring containment
/// against the rule table, falling back to the topic overview. The prior
/// transcript does not influence the answer.
pub fn respond(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    for rule in RULES {
        if rule.keywords.iter().any(|k| lower.contains(k)) {
            return rule.response;
        }
    }

    FALLBACK_RESPONSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_scenario() {
        // Substring "attack" routes to the emergency guidance
        let response = respond("What should I do during an asthma attack?");
        assert_eq!(response, EMERGENCY_RESPONSE);
        assert!(response.contains("Call 911"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(respond("TELL ME ABOUT MY SYMPTOMS"), SYMPTOMS_RESPONSE);
        assert_eq!(respond("Wheezing at night"), SYMPTOMS_RESPONSE);
    }

    #[test]
    fn test_greeting_takes_priority() {
        assert_eq!(respond("hello"), GREETING_RESPONSE);
        // Greeting outranks later rules when both match
        assert_eq!(respond("hey, what food should I eat?"), GREETING_RESPONSE);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "cough" (symptoms) appears before "trigger" in the table
        assert_eq!(respond("does my cough have a trigger?"), SYMPTOMS_RESPONSE);
    }

    #[test]
    fn test_topic_rules() {
        assert_eq!(respond("tell me about my inhaler"), MEDICATION_RESPONSE);
        assert_eq!(respond("is the aqi bad today?"), AIR_QUALITY_RESPONSE);
        assert_eq!(respond("can I workout?"), EXERCISE_RESPONSE);
        assert_eq!(respond("nutrition advice please"), DIET_RESPONSE);
        assert_eq!(respond("dealing with anxiety"), STRESS_RESPONSE);
        assert_eq!(respond("how do I measure peak flow?"), PEAK_FLOW_RESPONSE);
        assert_eq!(respond("planning a vacation"), TRAVEL_RESPONSE);
    }

    #[test]
    fn test_fallback_for_unmatched_message() {
        let response = respond("qwerty");
        assert_eq!(response, FALLBACK_RESPONSE);
        assert!(response.contains("asthma-related questions"));
    }

    #[test]
    fn test_responses_are_stable() {
        // Pure function: same input, same output
        assert_eq!(respond("attack"), respond("attack"));
    }
}
