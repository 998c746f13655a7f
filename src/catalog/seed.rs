use super::{CatalogError, CatalogSource};
use crate::models::ItemRecord;

/// The built-in movie catalog
///
/// Hollywood and Bollywood titles across seven genres. Contains two titles
/// that appear under more than one genre ("The Matrix" and
/// "Yeh Jawaani Hai Deewani").
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl CatalogSource for SeedCatalog {
    fn records(&self) -> Result<Vec<ItemRecord>, CatalogError> {
        Ok(SEED
            .iter()
            .map(|&(title, category, principal, score, origin)| {
                ItemRecord::new(title, category, principal, score, origin)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "seed"
    }
}

// (title, genre, principal actor, rating, origin)
#[rustfmt::skip]
const SEED: &[(&str, &str, &str, f64, &str)] = &[
    ("Inception", "Sci-Fi", "Leonardo DiCaprio", 8.8, "Hollywood"),
    ("Interstellar", "Sci-Fi", "Matthew McConaughey", 8.6, "Hollywood"),
    ("The Matrix", "Sci-Fi", "Keanu Reeves", 8.7, "Hollywood"),
    ("Arrival", "Sci-Fi", "Amy Adams", 7.9, "Hollywood"),
    ("Blade Runner 2049", "Sci-Fi", "Ryan Gosling", 8.0, "Hollywood"),
    ("Tenet", "Sci-Fi", "John David Washington", 7.5, "Hollywood"),
    ("Avatar", "Sci-Fi", "Sam Worthington", 7.8, "Hollywood"),
    ("Gravity", "Sci-Fi", "Sandra Bullock", 7.7, "Hollywood"),
    ("The Martian", "Sci-Fi", "Matt Damon", 8.0, "Hollywood"),
    ("Edge of Tomorrow", "Sci-Fi", "Tom Cruise", 7.9, "Hollywood"),
    ("Looper", "Sci-Fi", "Joseph Gordon-Levitt", 7.4, "Hollywood"),
    ("Moon", "Sci-Fi", "Sam Rockwell", 7.8, "Hollywood"),
    ("District 9", "Sci-Fi", "Sharlto Copley", 7.9, "Hollywood"),
    ("The Dark Knight", "Action", "Christian Bale", 9.0, "Hollywood"),
    ("Batman Begins", "Action", "Christian Bale", 8.2, "Hollywood"),
    ("The Dark Knight Rises", "Action", "Christian Bale", 8.4, "Hollywood"),
    ("Mad Max: Fury Road", "Action", "Tom Hardy", 8.1, "Hollywood"),
    ("John Wick", "Action", "Keanu Reeves", 7.4, "Hollywood"),
    ("Die Hard", "Action", "Bruce Willis", 8.2, "Hollywood"),
    ("Gladiator", "Action", "Russell Crowe", 8.5, "Hollywood"),
    ("Braveheart", "Action", "Mel Gibson", 8.3, "Hollywood"),
    ("The Matrix", "Action", "Keanu Reeves", 8.7, "Hollywood"),
    ("Terminator 2", "Action", "Arnold Schwarzenegger", 8.5, "Hollywood"),
    ("Die Hard 2", "Action", "Bruce Willis", 7.1, "Hollywood"),
    ("The Bourne Identity", "Action", "Matt Damon", 7.9, "Hollywood"),
    ("Mission Impossible", "Action", "Tom Cruise", 7.1, "Hollywood"),
    ("The Prestige", "Drama", "Christian Bale", 8.5, "Hollywood"),
    ("Catch Me If You Can", "Drama", "Leonardo DiCaprio", 8.1, "Hollywood"),
    ("The Shawshank Redemption", "Drama", "Tim Robbins", 9.3, "Hollywood"),
    ("Forrest Gump", "Drama", "Tom Hanks", 8.8, "Hollywood"),
    ("The Green Mile", "Drama", "Tom Hanks", 8.6, "Hollywood"),
    ("The Godfather", "Drama", "Marlon Brando", 9.2, "Hollywood"),
    ("Schindler's List", "Drama", "Liam Neeson", 8.9, "Hollywood"),
    ("Fight Club", "Drama", "Brad Pitt", 8.8, "Hollywood"),
    ("Pulp Fiction", "Drama", "John Travolta", 8.9, "Hollywood"),
    ("Good Will Hunting", "Drama", "Matt Damon", 8.3, "Hollywood"),
    ("A Beautiful Mind", "Drama", "Russell Crowe", 8.2, "Hollywood"),
    ("The Social Network", "Drama", "Jesse Eisenberg", 7.7, "Hollywood"),
    ("The Pursuit of Happyness", "Drama", "Will Smith", 8.0, "Hollywood"),
    ("Shutter Island", "Thriller", "Leonardo DiCaprio", 8.2, "Hollywood"),
    ("Memento", "Thriller", "Guy Pearce", 8.4, "Hollywood"),
    ("Gone Girl", "Thriller", "Ben Affleck", 8.1, "Hollywood"),
    ("Se7en", "Thriller", "Brad Pitt", 8.6, "Hollywood"),
    ("The Silence of the Lambs", "Thriller", "Jodie Foster", 8.6, "Hollywood"),
    ("Psycho", "Thriller", "Anthony Perkins", 8.5, "Hollywood"),
    ("The Usual Suspects", "Thriller", "Kevin Spacey", 8.5, "Hollywood"),
    ("Fargo", "Thriller", "Frances McDormand", 8.1, "Hollywood"),
    ("Zodiac", "Thriller", "Jake Gyllenhaal", 7.7, "Hollywood"),
    ("Prisoners", "Thriller", "Hugh Jackman", 8.1, "Hollywood"),
    ("Nightcrawler", "Thriller", "Jake Gyllenhaal", 7.8, "Hollywood"),
    ("The Girl with the Dragon Tattoo", "Thriller", "Daniel Craig", 7.8, "Hollywood"),
    ("The Wolf of Wall Street", "Comedy", "Leonardo DiCaprio", 8.2, "Hollywood"),
    ("Superbad", "Comedy", "Jonah Hill", 7.6, "Hollywood"),
    ("The Hangover", "Comedy", "Bradley Cooper", 7.7, "Hollywood"),
    ("Bridesmaids", "Comedy", "Kristen Wiig", 6.8, "Hollywood"),
    ("Anchorman", "Comedy", "Will Ferrell", 7.2, "Hollywood"),
    ("Step Brothers", "Comedy", "Will Ferrell", 6.9, "Hollywood"),
    ("Talladega Nights", "Comedy", "Will Ferrell", 6.6, "Hollywood"),
    ("The 40-Year-Old Virgin", "Comedy", "Steve Carell", 7.1, "Hollywood"),
    ("Knocked Up", "Comedy", "Seth Rogen", 7.0, "Hollywood"),
    ("Forgetting Sarah Marshall", "Comedy", "Jason Segel", 7.1, "Hollywood"),
    ("Groundhog Day", "Comedy", "Bill Murray", 8.0, "Hollywood"),
    ("Mrs. Doubtfire", "Comedy", "Robin Williams", 7.1, "Hollywood"),
    ("Dunkirk", "War", "Tom Hardy", 7.9, "Hollywood"),
    ("Saving Private Ryan", "War", "Tom Hanks", 8.6, "Hollywood"),
    ("1917", "War", "George MacKay", 8.3, "Hollywood"),
    ("Apocalypse Now", "War", "Martin Sheen", 8.4, "Hollywood"),
    ("Full Metal Jacket", "War", "Matthew Modine", 8.3, "Hollywood"),
    ("Platoon", "War", "Charlie Sheen", 8.1, "Hollywood"),
    ("Black Hawk Down", "War", "Josh Hartnett", 7.7, "Hollywood"),
    ("The Hurt Locker", "War", "Jeremy Renner", 7.5, "Hollywood"),
    ("American Sniper", "War", "Bradley Cooper", 7.3, "Hollywood"),
    ("Hacksaw Ridge", "War", "Andrew Garfield", 8.1, "Hollywood"),
    ("Crazy Rich Asians", "Rom-Com", "Constance Wu", 7.0, "Hollywood"),
    ("The Proposal", "Rom-Com", "Sandra Bullock", 7.3, "Hollywood"),
    ("10 Things I Hate About You", "Rom-Com", "Heath Ledger", 7.3, "Hollywood"),
    ("When Harry Met Sally", "Rom-Com", "Meg Ryan", 7.6, "Hollywood"),
    ("Notting Hill", "Rom-Com", "Julia Roberts", 7.2, "Hollywood"),
    ("Love Actually", "Rom-Com", "Hugh Grant", 7.6, "Hollywood"),
    ("Pretty Woman", "Rom-Com", "Julia Roberts", 7.1, "Hollywood"),
    ("27 Dresses", "Rom-Com", "Katherine Heigl", 6.5, "Hollywood"),
    ("The Holiday", "Rom-Com", "Cameron Diaz", 7.0, "Hollywood"),
    ("How to Lose a Guy in 10 Days", "Rom-Com", "Kate Hudson", 6.8, "Hollywood"),
    ("Mamma Mia!", "Rom-Com", "Meryl Streep", 6.5, "Hollywood"),
    ("The Devil Wears Prada", "Rom-Com", "Anne Hathaway", 7.5, "Hollywood"),
    ("Pathaan", "Action", "Shah Rukh Khan", 7.5, "Bollywood"),
    ("War", "Action", "Hrithik Roshan", 7.8, "Bollywood"),
    ("Tiger Zinda Hai", "Action", "Salman Khan", 7.2, "Bollywood"),
    ("Dhoom 3", "Action", "Aamir Khan", 7.1, "Bollywood"),
    ("Bang Bang", "Action", "Hrithik Roshan", 7.0, "Bollywood"),
    ("Singham", "Action", "Ajay Devgn", 7.3, "Bollywood"),
    ("Don 2", "Action", "Shah Rukh Khan", 7.6, "Bollywood"),
    ("Krrish 3", "Action", "Hrithik Roshan", 6.9, "Bollywood"),
    ("Chennai Express", "Action", "Shah Rukh Khan", 7.2, "Bollywood"),
    ("Dabangg", "Action", "Salman Khan", 7.1, "Bollywood"),
    ("Race 3", "Action", "Salman Khan", 5.2, "Bollywood"),
    ("Simmba", "Action", "Ranveer Singh", 7.0, "Bollywood"),
    ("3 Idiots", "Drama", "Aamir Khan", 9.1, "Bollywood"),
    ("Dangal", "Drama", "Aamir Khan", 9.0, "Bollywood"),
    ("Taare Zameen Par", "Drama", "Aamir Khan", 8.8, "Bollywood"),
    ("Bajrangi Bhaijaan", "Drama", "Salman Khan", 8.5, "Bollywood"),
    ("PK", "Drama", "Aamir Khan", 8.6, "Bollywood"),
    ("Swades", "Drama", "Shah Rukh Khan", 8.7, "Bollywood"),
    ("Chak De India", "Drama", "Shah Rukh Khan", 8.5, "Bollywood"),
    ("Queen", "Drama", "Kangana Ranaut", 8.6, "Bollywood"),
    ("Udaan", "Drama", "Rajat Barmecha", 8.5, "Bollywood"),
    ("Zindagi Na Milegi Dobara", "Drama", "Hrithik Roshan", 8.4, "Bollywood"),
    ("Barfi!", "Drama", "Ranbir Kapoor", 8.3, "Bollywood"),
    ("Yeh Jawaani Hai Deewani", "Drama", "Ranbir Kapoor", 7.9, "Bollywood"),
    ("Hera Pheri", "Comedy", "Akshay Kumar", 8.5, "Bollywood"),
    ("Phir Hera Pheri", "Comedy", "Akshay Kumar", 8.1, "Bollywood"),
    ("Golmaal", "Comedy", "Ajay Devgn", 7.8, "Bollywood"),
    ("Golmaal Returns", "Comedy", "Ajay Devgn", 7.3, "Bollywood"),
    ("Dhamaal", "Comedy", "Arshad Warsi", 7.6, "Bollywood"),
    ("Welcome", "Comedy", "Akshay Kumar", 7.5, "Bollywood"),
    ("Bhool Bhulaiyaa", "Comedy", "Akshay Kumar", 7.9, "Bollywood"),
    ("Hungama", "Comedy", "Akshaye Khanna", 7.8, "Bollywood"),
    ("Andaz Apna Apna", "Comedy", "Aamir Khan", 8.2, "Bollywood"),
    ("Chup Chup Ke", "Comedy", "Shahid Kapoor", 7.4, "Bollywood"),
    ("De Dana Dan", "Comedy", "Akshay Kumar", 7.2, "Bollywood"),
    ("Housefull", "Comedy", "Akshay Kumar", 6.8, "Bollywood"),
    ("Drishyam", "Thriller", "Ajay Devgn", 8.6, "Bollywood"),
    ("Kahaani", "Thriller", "Vidya Balan", 8.4, "Bollywood"),
    ("Andhadhun", "Thriller", "Ayushmann Khurrana", 8.7, "Bollywood"),
    ("Talaash", "Thriller", "Aamir Khan", 7.9, "Bollywood"),
    ("Badla", "Thriller", "Amitabh Bachchan", 8.2, "Bollywood"),
    ("Raat Akeli Hai", "Thriller", "Nawazuddin Siddiqui", 8.0, "Bollywood"),
    ("Ugly", "Thriller", "Rahul Bhat", 8.1, "Bollywood"),
    ("A Wednesday", "Thriller", "Naseeruddin Shah", 8.5, "Bollywood"),
    ("Kahani 2", "Thriller", "Vidya Balan", 7.1, "Bollywood"),
    ("Ittefaq", "Thriller", "Sidharth Malhotra", 7.4, "Bollywood"),
    ("Raman Raghav 2.0", "Thriller", "Nawazuddin Siddiqui", 7.7, "Bollywood"),
    ("Jersey", "Thriller", "Shahid Kapoor", 8.3, "Bollywood"),
    ("Jab We Met", "Rom-Com", "Shahid Kapoor", 8.3, "Bollywood"),
    ("Yeh Jawaani Hai Deewani", "Rom-Com", "Ranbir Kapoor", 7.9, "Bollywood"),
    ("2 States", "Rom-Com", "Arjun Kapoor", 7.5, "Bollywood"),
    ("Ek Main Aur Ekk Tu", "Rom-Com", "Imran Khan", 6.9, "Bollywood"),
    ("Badrinath Ki Dulhania", "Rom-Com", "Varun Dhawan", 7.2, "Bollywood"),
    ("Humpty Sharma Ki Dulhania", "Rom-Com", "Varun Dhawan", 7.0, "Bollywood"),
    ("Dilwale Dulhania Le Jayenge", "Rom-Com", "Shah Rukh Khan", 8.5, "Bollywood"),
    ("Kuch Kuch Hota Hai", "Rom-Com", "Shah Rukh Khan", 8.2, "Bollywood"),
    ("Kal Ho Naa Ho", "Rom-Com", "Shah Rukh Khan", 8.1, "Bollywood"),
    ("Kabhi Khushi Kabhie Gham", "Rom-Com", "Shah Rukh Khan", 7.8, "Bollywood"),
    ("Ae Dil Hai Mushkil", "Rom-Com", "Ranbir Kapoor", 7.4, "Bollywood"),
    ("Tamasha", "Rom-Com", "Ranbir Kapoor", 7.8, "Bollywood"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = Catalog::load(&SeedCatalog).unwrap();
        assert_eq!(catalog.len(), 145);
        assert_eq!(catalog.origins(), vec!["Hollywood", "Bollywood"]);
    }

    #[test]
    fn test_seed_duplicate_titles_resolve_to_first_genre() {
        let catalog = Catalog::load(&SeedCatalog).unwrap();

        let matrix = catalog.position_of_title("The Matrix").unwrap();
        assert_eq!(catalog.items()[matrix].category, "Sci-Fi");

        let yjhd = catalog.position_of_title("Yeh Jawaani Hai Deewani").unwrap();
        assert_eq!(catalog.items()[yjhd].category, "Drama");
    }
}
