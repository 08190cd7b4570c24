use reelmatch::{
    api::{create_router, AppState, RecommendLimits},
    services::{Dataset, Recommender},
};

pub const MOVIES_CSV: &str = "\
title,genres,keywords,rating
The Matrix,Action|Sci-Fi,hacker simulation reality artificial intelligence,8.7
Matrix Reloaded,Action|Sci-Fi,hacker simulation sequel artificial intelligence,7.2
Heat,Crime|Thriller,heist detective los angeles bank robbery,8.3
Ronin,Action|Crime|Thriller,heist mercenary car chase,7.2
Alien,Horror|Sci-Fi,space crew creature spaceship,8.5
Aliens,Action|Horror|Sci-Fi,space marines creature colony,8.4
Notting Hill,Comedy|Romance,bookshop london actress,7.2
Love Actually,Comedy|Romance,london christmas ensemble,7.6
Blade Runner,Sci-Fi|Thriller,android detective dystopia,
";

pub fn app() -> axum::Router {
    let dataset = Dataset::from_reader(MOVIES_CSV.as_bytes()).unwrap();
    let recommender = Recommender::new(dataset, 5000);
    create_router(AppState::new(recommender, RecommendLimits::default()))
}
