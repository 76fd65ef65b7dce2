//! Itinerary prompt rendering
//!
//! The template is fixed; only the trip fields vary between calls. Values are
//! interpolated verbatim.

use crate::models::TripRequest;

/// Section headings the backend is asked to produce, in order
pub const ITINERARY_SECTIONS: [&str; 8] = [
    "Overview",
    "Budget Breakdown",
    "Day-by-Day Itinerary",
    "Accommodation Recommendations",
    "Transportation",
    "Packing Suggestions",
    "Local Tips & Cultural Information",
    "Emergency Information",
];

/// Render the itinerary prompt for a trip
pub fn render_prompt(trip: &TripRequest) -> String {
    format!(
        r#"
You are an expert travel planner. Create a detailed, personalized travel itinerary based on the following information:

Source: {origin}
Destination: {destination}
Travel Dates: {start_date} to {end_date}
Budget: {budget}
Number of Travelers: {travelers}
Interests: {interests}

Please provide a comprehensive travel plan that includes:

1. **Overview**
   - Brief description of the destination
   - Best time to visit considerations
   - Duration of trip

2. **Budget Breakdown**
   - Estimated costs for flights
   - Accommodation suggestions with price ranges
   - Daily food budget recommendations
   - Activity and entertainment costs
   - Transportation costs
   - Emergency fund suggestions

3. **Day-by-Day Itinerary**
   - Detailed daily schedule
   - Must-visit attractions based on interests
   - Recommended restaurants and local cuisine
   - Transportation between locations
   - Approximate timing for each activity

4. **Accommodation Recommendations**
   - 3-4 hotel/accommodation options in different price ranges
   - Location benefits and amenities
   - Booking tips

5. **Transportation**
   - Flight recommendations and booking tips
   - Local transportation options
   - Getting around the destination

6. **Packing Suggestions**
   - Weather-appropriate clothing
   - Essential items based on planned activities
   - Documents needed

7. **Local Tips & Cultural Information**
   - Cultural etiquette
   - Language basics if applicable
   - Tipping customs
   - Safety considerations
   - Local customs to be aware of

8. **Emergency Information**
   - Important phone numbers
   - Embassy contact (if international)
   - Health and safety tips

Please make the plan practical, realistic within the given budget, and tailored to the specified interests. Format the response in a clear, easy-to-read structure.
"#,
        origin = trip.origin,
        destination = trip.destination,
        start_date = trip.start_date,
        end_date = trip.end_date,
        budget = trip.budget,
        travelers = trip.traveler_count,
        interests = trip.interests,
    )
}
