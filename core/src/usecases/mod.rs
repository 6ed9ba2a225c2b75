mod create_checkout_session;
mod finalize_checkout;
mod list_enrollments;
mod manage_cart;
mod manage_courses;
mod manage_quizzes;
mod manage_reviews;
mod record_quiz_scores;

use std::sync::Arc;

use deadpool_postgres::Pool;

pub use create_checkout_session::CreateCheckoutSession;
pub use finalize_checkout::{CheckoutFinalized, FinalizeCheckout};
pub use list_enrollments::ListEnrollments;
pub use manage_cart::ManageCart;
pub use manage_courses::ManageCourses;
pub use manage_quizzes::ManageQuizzes;
pub use manage_reviews::ManageReviews;
pub use record_quiz_scores::RecordQuizScores;

use crate::config::Settings;
use crate::outbound::StripeCheckout;
use crate::store::{CartStore, CourseStore, EnrollmentStore, QuizScoreStore, QuizStore, ReviewStore};
use crate::webhook::EventVerifier;

#[derive(Clone)]
pub struct UseCases {
    pub finalize_checkout: FinalizeCheckout,
    pub create_checkout_session: CreateCheckoutSession,
    pub courses: ManageCourses,
    pub reviews: ManageReviews,
    pub quizzes: ManageQuizzes,
    pub quiz_scores: RecordQuizScores,
    pub cart: ManageCart,
    pub enrollments: ListEnrollments,
}

impl UseCases {
    pub fn new(settings: &Settings, db_pool: Pool) -> Self {
        let enrollment_store = EnrollmentStore::new(db_pool.clone());
        let cart_store = CartStore::new(db_pool.clone());

        Self {
            finalize_checkout: FinalizeCheckout::new(
                EventVerifier::new(settings),
                Arc::new(enrollment_store.clone()),
                Arc::new(cart_store.clone()),
            ),
            create_checkout_session: CreateCheckoutSession::new(StripeCheckout::new(settings)),
            courses: ManageCourses::new(CourseStore::new(db_pool.clone())),
            reviews: ManageReviews::new(ReviewStore::new(db_pool.clone())),
            quizzes: ManageQuizzes::new(QuizStore::new(db_pool.clone())),
            quiz_scores: RecordQuizScores::new(QuizScoreStore::new(db_pool)),
            cart: ManageCart::new(cart_store),
            enrollments: ListEnrollments::new(enrollment_store),
        }
    }
}
