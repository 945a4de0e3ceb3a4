// service/job_service.rs
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{db::DBClient, jobdb::JobExt},
    dtos::jobdtos::{CreateJobOfferDto, CreateJobRequestDto, UpdateJobOfferDto},
    models::{
        jobmodels::{JobOffer, JobOfferStatus, JobRequest, JobRequestStatus},
        sessionmodel::Session,
    },
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct JobService {
    db_client: Arc<DBClient>,
}

impl JobService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn get_job_requests(&self) -> Result<Vec<JobRequest>, ServiceError> {
        Ok(self.db_client.get_job_requests().await?)
    }

    pub async fn get_job_request(&self, request_id: Uuid) -> Result<JobRequest, ServiceError> {
        self.db_client
            .get_job_request(request_id)
            .await?
            .ok_or(ServiceError::JobRequestNotFound(request_id))
    }

    pub async fn create_job_request(
        &self,
        session: &Session,
        dto: CreateJobRequestDto,
    ) -> Result<JobRequest, ServiceError> {
        dto.validate()?;

        let request = JobRequest {
            id: Uuid::new_v4(),
            buyer_id: session.user_id,
            title: dto.title,
            description: dto.description,
            budget: dto.budget,
            category_id: dto.category_id,
            deadline: dto.deadline,
            invited_sellers: dto.invited_sellers,
            status: JobRequestStatus::Open,
            created_at: Utc::now(),
        };

        let request = self.db_client.save_job_request(request).await?;
        tracing::info!("📝 Job request '{}' posted by {}", request.title, request.buyer_id);
        Ok(request)
    }

    pub async fn close_job_request(&self, session: &Session, request_id: Uuid) -> Result<JobRequest, ServiceError> {
        let request = self.get_job_request(request_id).await?;
        if !session.can_manage(request.buyer_id) {
            return Err(ServiceError::forbidden("only the buyer can close a job request"));
        }

        let closed = self
            .db_client
            .update_job_request_status(request.id, JobRequestStatus::Closed)
            .await?;
        tracing::info!("Job request {} closed", closed.id);
        Ok(closed)
    }

    pub async fn get_offers(&self, request_id: Uuid) -> Result<Vec<JobOffer>, ServiceError> {
        Ok(self.db_client.get_job_offers(request_id).await?)
    }

    pub async fn create_offer(&self, session: &Session, dto: CreateJobOfferDto) -> Result<JobOffer, ServiceError> {
        if !session.role.can_sell() {
            return Err(ServiceError::forbidden("only sellers can send offers"));
        }
        dto.validate()?;

        let request = self.get_job_request(dto.job_request_id).await?;
        let offer = JobOffer {
            id: Uuid::new_v4(),
            job_request_id: request.id,
            seller_id: session.user_id,
            amount: dto.amount,
            delivery_days: dto.delivery_days,
            proposal: dto.proposal,
            status: JobOfferStatus::Pending,
            created_at: Utc::now(),
        };

        let offer = self.db_client.save_job_offer(offer).await?;
        tracing::info!("Offer {} sent on job request {}", offer.id, request.id);
        Ok(offer)
    }

    /// Any field may change and any status may be set, by the request's
    /// buyer, the offering seller or an admin.
    pub async fn update_offer(
        &self,
        session: &Session,
        offer_id: Uuid,
        dto: UpdateJobOfferDto,
    ) -> Result<JobOffer, ServiceError> {
        let offer = self
            .db_client
            .get_job_offer(offer_id)
            .await?
            .ok_or(ServiceError::JobOfferNotFound(offer_id))?;
        let request = self.get_job_request(offer.job_request_id).await?;

        if !session.can_manage(offer.seller_id) && session.user_id != request.buyer_id {
            return Err(ServiceError::forbidden("only the parties can change an offer"));
        }
        dto.validate()?;

        let updated = self.db_client.update_job_offer(offer.id, dto).await?;
        tracing::info!("Offer {} is {}", updated.id, updated.status.to_str());
        Ok(updated)
    }
}
